//! Fixed exchange rates against the base currency (USD)

use crate::core::currency::CurrencyCode;
use crate::core::error::ExchangeError;
use std::collections::BTreeMap;
use tracing::debug;

/// Default rates, one per currency in `CurrencyCode::ALL` order.
const DEFAULT_RATES: [f64; CurrencyCode::ALL.len()] = [
    1.0,   // USD
    0.85,  // EUR
    0.73,  // GBP
    1.08,  // CHF
    3.95,  // PLN
    22.10, // CZK
];

/// Immutable table of units of each currency per one unit of the base currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: [f64; CurrencyCode::ALL.len()],
}

impl RateTable {
    /// Builds the default table and applies configured overrides on top.
    pub fn with_overrides(overrides: &BTreeMap<CurrencyCode, f64>) -> Result<Self, ExchangeError> {
        let mut table = Self::default();
        for (&currency, &rate) in overrides {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ExchangeError::InvalidRate { currency, rate });
            }
            debug!(%currency, rate, "Overriding default rate");
            table.rates[currency.index()] = rate;
        }
        Ok(table)
    }

    /// Every currency has a rate, so this never fails; the `Result` matches
    /// the fallible lookup used by `ExchangeService`.
    pub fn rate_of(&self, code: CurrencyCode) -> Result<f64, ExchangeError> {
        Ok(self.rates[code.index()])
    }

    /// (code, rate) pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (CurrencyCode, f64)> + '_ {
        CurrencyCode::ALL
            .into_iter()
            .map(|code| (code, self.rates[code.index()]))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES,
        }
    }
}
