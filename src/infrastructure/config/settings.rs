//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Configuration is loaded from a TOML file; Telegram credentials
//! come from the environment.
//!
//! # Example
//!
//! ```no_run
//! use restock::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::poll::PollConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::catalog::settings::CatalogConfig;
use crate::domain::DetectPolicy;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Remote catalog endpoint.
    pub catalog: CatalogConfig,

    /// Poll loop and snapshot settings.
    #[serde(default)]
    pub poll: PollConfig,

    /// Telegram notification configuration.
    #[serde(default)]
    pub telegram: TelegramAppConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.catalog.url.is_empty() {
            return Err(ConfigError::MissingField { field: "catalog.url" }.into());
        }
        let url = url::Url::parse(&self.catalog.url).map_err(|e| ConfigError::InvalidValue {
            field: "catalog.url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "catalog.url",
                reason: format!("unsupported scheme `{}`", url.scheme()),
            }
            .into());
        }
        if self.catalog.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.catalog.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll.interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.poll.query_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll.query_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.poll.snapshot_path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "poll.snapshot_path",
            }
            .into());
        }
        Ok(())
    }

    /// Interval between availability checks.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll.interval_secs)
    }

    /// Upper bound for an on-demand query.
    #[must_use]
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.poll.query_timeout_secs)
    }

    /// Detection policy derived from `[poll]`.
    #[must_use]
    pub fn detect_policy(&self) -> DetectPolicy {
        DetectPolicy {
            announce_new_products: self.poll.announce_new_products,
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
