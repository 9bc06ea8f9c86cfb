//! Pure conversion arithmetic.
//!
//! Values are kept at full `f64` precision. Rounding to two decimals only
//! happens in [`format_amount`], which uses Rust's `{:.2}` formatting: the
//! exact binary value is rounded to nearest and exact ties go to even.

use crate::core::error::ExchangeError;

/// Converts `amount` from a currency quoted at `source_rate` into one quoted
/// at `target_rate`. Both rates are units per one unit of the base currency
/// and must be positive, which [`RateTable`](crate::core::rates::RateTable)
/// guarantees.
pub fn convert(amount: f64, source_rate: f64, target_rate: f64) -> Result<f64, ExchangeError> {
    debug_assert!(source_rate > 0.0 && target_rate > 0.0);
    if !amount.is_finite() || amount < 0.0 {
        return Err(ExchangeError::InvalidAmount(amount));
    }
    let result = amount * (target_rate / source_rate);
    if !result.is_finite() {
        return Err(ExchangeError::AmountOutOfRange(amount));
    }
    Ok(result)
}

/// Formats an amount for display with two decimal places.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}
