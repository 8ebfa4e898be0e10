use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/showcase/config.toml` on Unix/macOS, or the
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("showcase").join("config.toml")
    }

    /// Default log file under the cache directory.
    pub fn default_log_path() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("showcase").join("showcase.log")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
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

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The catalogue has at least one page
    /// - Every carousel and form delay is non-zero
    /// - Visibility and reveal thresholds lie in (0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.pages.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one catalogue page must be configured".to_string(),
            });
        }

        let delays = [
            ("carousel.turn_out_ms", self.carousel.turn_out_ms),
            ("carousel.turn_in_ms", self.carousel.turn_in_ms),
            ("carousel.auto_advance_ms", self.carousel.auto_advance_ms),
            ("carousel.quiet_period_ms", self.carousel.quiet_period_ms),
            ("form.submit_delay_ms", self.form.submit_delay_ms),
        ];
        if let Some((name, _)) = delays.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ValidationError {
                message: format!("'{}' must be greater than zero", name),
            });
        }

        let thresholds = [
            ("carousel.visibility_threshold", self.carousel.visibility_threshold),
            ("reveal.threshold", self.reveal.threshold),
        ];
        for (name, value) in thresholds {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::ValidationError {
                    message: format!("'{}' must be in (0, 1], got {}", name, value),
                });
            }
        }

        Ok(())
    }
}
