//! Interactive menu loop.

use super::{currencies, history, ui};
use crate::core::convert::format_amount;
use crate::core::exchange::{ConversionRequest, Exchange, ExchangeService};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Text where a number was expected.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Expected a number but got '{0}'")]
pub struct MalformedInput(pub String);

/// Parses a user supplied amount. A decimal comma is accepted.
pub fn parse_amount(text: &str) -> Result<f64, MalformedInput> {
    let trimmed = text.trim();
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MalformedInput(trimmed.to_string()))
}

/// Formats the outcome of an exchange, including a persistence warning if any.
pub fn format_exchange(exchange: &Exchange) -> String {
    let result = format!(
        "{} {}",
        format_amount(exchange.record.result_amount),
        exchange.record.target.description()
    );
    let mut output = format!(
        "Result: {}",
        ui::style_text(&result, ui::StyleType::Result)
    );
    if let Some(warning) = &exchange.warning {
        output.push('\n');
        output.push_str(&ui::style_text(
            &format!("Warning: {warning}"),
            ui::StyleType::Warning,
        ));
    }
    output
}

pub struct Shell<'a, R, W> {
    service: &'a mut ExchangeService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(service: &'a mut ExchangeService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs until the user picks exit or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let listing = currencies::display_as_list(&self.service.list_supported_currencies());
        writeln!(self.output, "{listing}")?;

        loop {
            writeln!(self.output, "\nMenu:")?;
            writeln!(self.output, "1. Exchange currency")?;
            writeln!(self.output, "2. Exchange history")?;
            writeln!(self.output, "3. Exit")?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                debug!("Input closed, leaving shell");
                writeln!(self.output)?;
                return Ok(());
            };

            match choice.trim().parse::<u32>() {
                Ok(1) => self.exchange()?,
                Ok(2) => self.show_history()?,
                Ok(3) => {
                    writeln!(self.output, "Exiting. Goodbye!")?;
                    return Ok(());
                }
                Ok(_) => writeln!(self.output, "Invalid choice. Please choose again.")?,
                Err(_) => writeln!(self.output, "Input error. Please enter a number.")?,
            }
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn exchange(&mut self) -> io::Result<()> {
        let Some(amount_text) = self.prompt("Enter the amount to exchange: ")? else {
            return Ok(());
        };
        let amount = match parse_amount(&amount_text) {
            Ok(amount) => amount,
            Err(e) => {
                self.report_error(&e.to_string())?;
                return Ok(());
            }
        };
        let Some(source) = self.prompt("Enter the currency you want to exchange: ")? else {
            return Ok(());
        };
        let Some(target) = self.prompt("Enter the currency you want to receive: ")? else {
            return Ok(());
        };

        let request = ConversionRequest::new(amount, source, target);
        match self.service.perform_exchange(&request) {
            Ok(exchange) => writeln!(self.output, "{}", format_exchange(&exchange)),
            Err(e) => self.report_error(&format!("Exchange failed: {e}")),
        }
    }

    fn show_history(&mut self) -> io::Result<()> {
        match self.service.list_history() {
            Ok(entries) => writeln!(self.output, "\n{}", history::display(&entries)),
            Err(e) => self.report_error(&e.to_string()),
        }
    }

    fn report_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(
            self.output,
            "{}",
            ui::style_text(message, ui::StyleType::Error)
        )
    }
}

/// Runs the interactive shell on the process's stdin and stdout.
pub fn run(service: &mut ExchangeService) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(service, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
