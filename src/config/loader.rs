use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::config::types::Config;
use crate::ui::add_dialog::MIN_DIALOG_WIDTH;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `~/.config/shoplist/config.toml` on Linux, the platform equivalent
    /// elsewhere via `dirs::config_dir()`, or `./shoplist/config.toml` when
    /// there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("shoplist").join("config.toml")
    }

    /// Loads from [`Config::config_path`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads and validates `path`. A missing file yields `Config::default()`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - the dialog is wide enough for its buttons
    /// - the poll interval is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.dialog_width < MIN_DIALOG_WIDTH {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.dialog_width must be at least {}, got {}",
                    MIN_DIALOG_WIDTH, self.ui.dialog_width
                ),
            });
        }

        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.poll_interval_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.ui.poll_interval_ms)
    }
}
