//! Exchange orchestration: currency lookup, conversion and history recording.

use crate::core::convert::convert;
use crate::core::currency::CurrencyCode;
use crate::core::error::{ExchangeError, HistoryUnavailable, PersistenceWarning};
use crate::core::history::{HistoryEntry, HistoryLog};
use crate::core::rates::RateTable;
use crate::core::record::ConversionRecord;
use tracing::{debug, info, warn};

/// A request to convert `amount` between two currencies given as free text.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub source: String,
    pub target: String,
}

impl ConversionRequest {
    pub fn new(amount: f64, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            amount,
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Outcome of a successful exchange. `warning` is set when the record could
/// not be persisted.
#[derive(Debug)]
pub struct Exchange {
    pub record: ConversionRecord,
    pub warning: Option<PersistenceWarning>,
}

/// A supported currency as surfaced to the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyInfo {
    pub code: CurrencyCode,
    pub description: &'static str,
    pub rate: f64,
}

pub struct ExchangeService {
    rates: RateTable,
    history: Box<dyn HistoryLog>,
}

impl ExchangeService {
    pub fn new(rates: RateTable, history: Box<dyn HistoryLog>) -> Self {
        Self { rates, history }
    }

    pub fn resolve_currency(&self, text: &str) -> Result<CurrencyCode, ExchangeError> {
        CurrencyCode::resolve(text)
    }

    /// Converts the requested amount and records the result.
    ///
    /// Nothing is recorded when the request is rejected. A failure to persist
    /// the record does not fail the exchange; it is returned as a warning
    /// alongside the record.
    pub fn perform_exchange(
        &mut self,
        request: &ConversionRequest,
    ) -> Result<Exchange, ExchangeError> {
        // -0 is recorded as 0
        let amount = request.amount + 0.0;
        if !amount.is_finite() || amount < 0.0 {
            return Err(ExchangeError::InvalidAmount(amount));
        }

        let source = self.resolve_currency(&request.source)?;
        let target = self.resolve_currency(&request.target)?;
        let source_rate = self.rates.rate_of(source)?;
        let target_rate = self.rates.rate_of(target)?;
        debug!(%source, source_rate, %target, target_rate, "Resolved rates");

        let result_amount = convert(amount, source_rate, target_rate)?;
        let record = ConversionRecord::new(amount, source, target, result_amount);
        info!(
            amount,
            %source,
            %target,
            result_amount,
            "Exchange completed"
        );

        let warning = self.history.append(&record).err();
        if let Some(w) = &warning {
            warn!(error = %w, "Exchange recorded without persistence");
        }

        Ok(Exchange { record, warning })
    }

    pub fn list_history(&self) -> Result<Vec<HistoryEntry>, HistoryUnavailable> {
        self.history.list_all()
    }

    /// Supported currencies in declaration order.
    pub fn list_supported_currencies(&self) -> Vec<CurrencyInfo> {
        self.rates
            .entries()
            .map(|(code, rate)| CurrencyInfo {
                code,
                description: code.description(),
                rate,
            })
            .collect()
    }
}
