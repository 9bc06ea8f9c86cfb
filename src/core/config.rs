use crate::core::currency::CurrencyCode;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{fs, path::PathBuf};
use tracing::debug;

const HISTORY_FILE_NAME: &str = "history.txt";

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Append every exchange to a text file that survives restarts
    #[default]
    File,
    /// Keep exchanges for the current session only
    Memory,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct HistoryConfig {
    #[serde(default)]
    pub mode: HistoryMode,
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    /// Rate overrides applied on top of the built-in table at startup
    #[serde(default)]
    pub rates: BTreeMap<CurrencyCode, f64>,
    pub data_path: Option<String>,
}

impl AppConfig {
    /// Loads the explicit config path if given. Otherwise loads the default
    /// config file, falling back to built-in defaults when none exists.
    pub fn load_or_default(config_path: Option<&str>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Self::default_config_path()?;
                if path.exists() {
                    Self::load_from_path(&path)
                } else {
                    debug!(path = %path.display(), "No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn default_data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("dev", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Location of the history file when the file mode is selected.
    pub fn history_path(&self) -> Result<PathBuf> {
        match &self.history.path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(self.default_data_path()?.join(HISTORY_FILE_NAME)),
        }
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
history:
  mode: memory
rates:
  EUR: 0.9
  CZK: 23.5
data_path: "/tmp/fxconv-data"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.history.mode, HistoryMode::Memory);
        assert!(config.history.path.is_none());
        assert_eq!(config.rates.len(), 2);
        assert_eq!(config.rates[&CurrencyCode::Eur], 0.9);
        assert_eq!(config.rates[&CurrencyCode::Czk], 23.5);
        assert_eq!(
            config.history_path().unwrap(),
            PathBuf::from("/tmp/fxconv-data").join("history.txt")
        );

        let yaml_str_with_path = r#"
history:
  path: "/var/log/exchanges.txt"
        "#;
        let config_with_path: AppConfig = serde_yaml::from_str(yaml_str_with_path).unwrap();
        assert_eq!(config_with_path.history.mode, HistoryMode::File);
        assert!(config_with_path.rates.is_empty());
        assert_eq!(
            config_with_path.history_path().unwrap(),
            PathBuf::from("/var/log/exchanges.txt")
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.history.mode, HistoryMode::File);
        assert!(config.rates.is_empty());
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_unknown_currency_in_rates_is_rejected() {
        let yaml_str = r#"
rates:
  XYZ: 1.5
"#;
        assert!(serde_yaml::from_str::<AppConfig>(yaml_str).is_err());
    }

    #[test]
    fn test_load_from_path() -> Result<()> {
        let file = NamedTempFile::new()?;
        fs::write(file.path(), "history:\n  mode: memory\n")?;

        let config = AppConfig::load_or_default(file.path().to_str())?;
        assert_eq!(config.history.mode, HistoryMode::Memory);
        Ok(())
    }

    #[test]
    fn test_load_from_missing_explicit_path_fails() {
        let result = AppConfig::load_or_default(Some("/definitely/not/here/config.yaml"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
