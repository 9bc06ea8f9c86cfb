use crate::core::error::{HistoryUnavailable, PersistenceWarning};
use crate::core::history::{HistoryEntry, HistoryLog};
use crate::core::record::ConversionRecord;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Newline delimited, append-only history file. Each append opens the file,
/// writes one line and closes it again, so earlier sessions are never
/// truncated.
#[derive(Debug, Clone)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        file.flush()
    }
}

impl HistoryLog for FileHistory {
    fn append(&mut self, record: &ConversionRecord) -> Result<(), PersistenceWarning> {
        match self.write_line(&record.to_string()) {
            Ok(()) => {
                debug!(path = %self.path.display(), "History APPEND (file)");
                Ok(())
            }
            Err(source) => {
                warn!(path = %self.path.display(), error = %source, "History APPEND failed");
                Err(PersistenceWarning {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }

    fn list_all(&self) -> Result<Vec<HistoryEntry>, HistoryUnavailable> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No history file yet");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(HistoryUnavailable {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        // Hand edited or damaged lines are still echoed
        let contents = String::from_utf8_lossy(&bytes);
        Ok(contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| HistoryEntry::Line(line.to_string()))
            .collect())
    }
}
