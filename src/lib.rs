pub mod cli;
pub mod core;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::{ExchangeService, RateTable};
use anyhow::{Context, Result};
use tracing::{debug, info};

pub enum AppCommand {
    Currencies,
    Convert {
        amount: f64,
        from: String,
        to: String,
    },
    History,
    Shell,
}

/// Builds the exchange service from configuration: rate overrides are
/// applied once and the configured history backend is opened.
pub fn build_service(config: &AppConfig) -> Result<ExchangeService> {
    let rates =
        RateTable::with_overrides(&config.rates).context("Invalid rate in configuration")?;
    let history = store::open_history(config)?;
    Ok(ExchangeService::new(rates, history))
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxconv starting...");

    let config = AppConfig::load_or_default(config_path)?;
    debug!("Loaded config: {config:#?}");

    let mut service = build_service(&config)?;

    match command {
        AppCommand::Currencies => {
            let currencies = service.list_supported_currencies();
            println!("{}", cli::currencies::display_as_table(&currencies));
            Ok(())
        }
        AppCommand::Convert { amount, from, to } => {
            cli::convert::run(&mut service, amount, &from, &to)
        }
        AppCommand::History => cli::history::run(&service),
        AppCommand::Shell => cli::shell::run(&mut service),
    }
}
