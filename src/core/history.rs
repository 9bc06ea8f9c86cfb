//! Exchange history abstractions

use crate::core::error::{HistoryUnavailable, PersistenceWarning};
use crate::core::record::ConversionRecord;
use std::fmt::Display;

/// An item of the exchange history.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEntry {
    /// A structured record kept for the current session.
    Record(ConversionRecord),
    /// A line read back from a persisted log.
    Line(String),
}

impl Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryEntry::Record(record) => write!(f, "{record}"),
            HistoryEntry::Line(line) => write!(f, "{line}"),
        }
    }
}

/// Append-only store of completed exchanges.
pub trait HistoryLog {
    /// Adds a record at the end of the log. A failure to persist the record
    /// is reported as a warning; the record itself stays valid.
    fn append(&mut self, record: &ConversionRecord) -> Result<(), PersistenceWarning>;

    /// Returns every entry in insertion order. May be called any number of
    /// times.
    fn list_all(&self) -> Result<Vec<HistoryEntry>, HistoryUnavailable>;
}
