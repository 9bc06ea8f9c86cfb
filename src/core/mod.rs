//! Core business logic: currencies, rates, conversion and exchange history

pub mod config;
pub mod convert;
pub mod currency;
pub mod error;
pub mod exchange;
pub mod history;
pub mod log;
pub mod rates;
pub mod record;

// Re-export main types for cleaner imports
pub use currency::CurrencyCode;
pub use error::{ExchangeError, HistoryUnavailable, PersistenceWarning};
pub use exchange::{ConversionRequest, CurrencyInfo, Exchange, ExchangeService};
pub use history::{HistoryEntry, HistoryLog};
pub use rates::RateTable;
pub use record::ConversionRecord;
