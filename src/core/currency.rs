//! Supported currencies

use crate::core::error::ExchangeError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Eur,
    Gbp,
    Chf,
    Pln,
    Czk,
}

impl CurrencyCode {
    /// Every supported currency, in declaration order.
    pub const ALL: [CurrencyCode; 6] = [
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Gbp,
        CurrencyCode::Chf,
        CurrencyCode::Pln,
        CurrencyCode::Czk,
    ];

    /// The ISO style three-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Chf => "CHF",
            CurrencyCode::Pln => "PLN",
            CurrencyCode::Czk => "CZK",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "US Dollar",
            CurrencyCode::Eur => "Euro",
            CurrencyCode::Gbp => "Pound Sterling",
            CurrencyCode::Chf => "Swiss Franc",
            CurrencyCode::Pln => "Polish Zloty",
            CurrencyCode::Czk => "Czech Koruna",
        }
    }

    /// Index into per-currency tables.
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    /// Resolves free text against both the code and the description,
    /// ignoring case and surrounding whitespace.
    pub fn resolve(text: &str) -> Result<Self, ExchangeError> {
        let needle = text.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.code().to_lowercase() == needle || c.description().to_lowercase() == needle
            })
            .ok_or_else(|| ExchangeError::UnknownCurrency(text.trim().to_string()))
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(CurrencyCode::resolve("usd"), CurrencyCode::resolve("USD"));
        assert_eq!(CurrencyCode::resolve("uSd").unwrap(), CurrencyCode::Usd);
        assert_eq!(CurrencyCode::resolve(" czk\n").unwrap(), CurrencyCode::Czk);
    }

    #[test]
    fn test_resolve_by_description() {
        assert_eq!(CurrencyCode::resolve("euro").unwrap(), CurrencyCode::Eur);
        assert_eq!(
            CurrencyCode::resolve("SWISS FRANC").unwrap(),
            CurrencyCode::Chf
        );
        assert_eq!(
            "pound sterling".parse::<CurrencyCode>().unwrap(),
            CurrencyCode::Gbp
        );
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(
            CurrencyCode::resolve("XYZ"),
            Err(ExchangeError::UnknownCurrency("XYZ".to_string()))
        );
        assert!(CurrencyCode::resolve("").is_err());
        assert!(CurrencyCode::resolve("US").is_err());
    }

    #[test]
    fn test_declaration_order_and_index() {
        let codes: Vec<&str> = CurrencyCode::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!["USD", "EUR", "GBP", "CHF", "PLN", "CZK"]);
        for (i, c) in CurrencyCode::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_serde_uses_upper_case_codes() {
        let code: CurrencyCode = serde_yaml::from_str("PLN").unwrap();
        assert_eq!(code, CurrencyCode::Pln);
        assert_eq!(code.to_string(), "PLN");
    }
}
