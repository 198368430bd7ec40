//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
///
/// Only ambient behavior is configurable. The source URL, heading
/// selectors, and the length/truncation thresholds are fixed constants
/// in their respective modules.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client behavior settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Console output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.scraper.user_agent.trim().is_empty() {
            return Err(AppError::config("scraper.user_agent is empty"));
        }
        if self.scraper.timeout_secs == 0 {
            return Err(AppError::config("scraper.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Console output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Whether the headline preview is printed to the console
    #[serde(default = "defaults::console_enabled")]
    pub console_enabled: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            console_enabled: defaults::console_enabled(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum console log level (debug/info/warn/error)
    #[serde(default = "defaults::log_level")]
    pub level: String,

    /// Whether per-stage progress details are printed
    #[serde(default = "defaults::show_progress")]
    pub show_progress: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            show_progress: defaults::show_progress(),
        }
    }
}

mod defaults {
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; headliner/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn console_enabled() -> bool {
        true
    }
    pub fn log_level() -> String {
        "info".into()
    }
    pub fn show_progress() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.scraper.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.scraper.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: Config = toml::from_str("[scraper]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.scraper.timeout_secs, 5);
        assert!(!config.scraper.user_agent.is_empty());
        assert!(config.output.console_enabled);
    }
}
