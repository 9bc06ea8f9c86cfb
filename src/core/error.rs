//! Error types raised by the exchange core

use crate::core::currency::CurrencyCode;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a conversion request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExchangeError {
    #[error("Amount to exchange must be a non-negative number, got {0}")]
    InvalidAmount(f64),

    #[error("Converted amount is out of range for an amount of {0}")]
    AmountOutOfRange(f64),

    #[error("Unknown currency: '{0}'")]
    UnknownCurrency(String),

    #[error("Invalid rate for {currency}: {rate}")]
    InvalidRate { currency: CurrencyCode, rate: f64 },
}

/// A durable history write failed. The conversion that produced the record
/// still succeeded.
#[derive(Error, Debug)]
#[error("Failed to write exchange history to {}: {source}", .path.display())]
pub struct PersistenceWarning {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// The history log exists but could not be read.
#[derive(Error, Debug)]
#[error("Exchange history at {} is unavailable: {source}", .path.display())]
pub struct HistoryUnavailable {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
