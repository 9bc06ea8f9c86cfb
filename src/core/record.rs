use crate::core::convert::format_amount;
use crate::core::currency::CurrencyCode;
use chrono::{DateTime, Local};
use std::fmt::Display;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One completed exchange. Created once per successful conversion and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRecord {
    pub timestamp: DateTime<Local>,
    pub amount: f64,
    pub source: CurrencyCode,
    pub target: CurrencyCode,
    pub result_amount: f64,
}

impl ConversionRecord {
    pub fn new(
        amount: f64,
        source: CurrencyCode,
        target: CurrencyCode,
        result_amount: f64,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            amount,
            source,
            target,
            result_amount,
        }
    }
}

/// The human readable history line, also used as the persisted format.
impl Display for ConversionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Date: {}, Amount: {} {} -> {} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.amount,
            self.source.code(),
            format_amount(self.result_amount),
            self.target.description()
        )
    }
}
