use super::shell::format_exchange;
use crate::core::exchange::{ConversionRequest, ExchangeService};
use anyhow::Result;

/// One-shot conversion. Rejected requests are returned as errors; a
/// persistence warning is printed but does not fail the command.
pub fn run(service: &mut ExchangeService, amount: f64, from: &str, to: &str) -> Result<()> {
    let exchange = service.perform_exchange(&ConversionRequest::new(amount, from, to))?;
    println!("{}", format_exchange(&exchange));
    Ok(())
}
