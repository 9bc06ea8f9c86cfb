pub mod file;
pub mod memory;

use crate::core::config::{AppConfig, HistoryMode};
use crate::core::history::HistoryLog;
use anyhow::Result;
use file::FileHistory;
use memory::MemoryHistory;
use tracing::debug;

/// Opens the history backend selected by the configuration.
pub fn open_history(config: &AppConfig) -> Result<Box<dyn HistoryLog>> {
    match config.history.mode {
        HistoryMode::Memory => {
            debug!("Using in-memory exchange history");
            Ok(Box::new(MemoryHistory::new()))
        }
        HistoryMode::File => {
            let path = config.history_path()?;
            debug!(path = %path.display(), "Using file exchange history");
            Ok(Box::new(FileHistory::new(path)))
        }
    }
}
