//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides:
//!
//! - `GROUPME_ACCESS_TOKEN` - required, never read from the file
//! - `GROUPME_GROUP_ID`, `GROUPME_BOT_ID`, `GROUPME_USER_ID` - override the file
//!
//! # Example
//!
//! ```no_run
//! use salesboard::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::polling::PollingConfig;
use crate::adapter::outbound::groupme::GroupMeConfig;
use crate::application::context::PollSettings;
use crate::error::{ConfigError, Result};

pub const ACCESS_TOKEN_ENV: &str = "GROUPME_ACCESS_TOKEN";
pub const GROUP_ID_ENV: &str = "GROUPME_GROUP_ID";
pub const BOT_ID_ENV: &str = "GROUPME_BOT_ID";
pub const USER_ID_ENV: &str = "GROUPME_USER_ID";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// GroupMe identifiers and HTTP settings.
    #[serde(default)]
    pub groupme: GroupMeConfig,

    /// Listener and snapshot window sizes.
    #[serde(default)]
    pub polling: PollingConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content, applying process environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content, resolving environment overrides
    /// through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // Token from environment only (never from config file)
        self.groupme.access_token = non_empty(ACCESS_TOKEN_ENV).unwrap_or_default();
        if let Some(group_id) = non_empty(GROUP_ID_ENV) {
            self.groupme.group_id = group_id;
        }
        if let Some(bot_id) = non_empty(BOT_ID_ENV) {
            self.groupme.bot_id = bot_id;
        }
        if let Some(user_id) = non_empty(USER_ID_ENV) {
            self.groupme.user_id = user_id;
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        let groupme = &self.groupme;
        let required = [
            ("api_url", &groupme.api_url),
            (ACCESS_TOKEN_ENV, &groupme.access_token),
            ("group_id", &groupme.group_id),
            ("bot_id", &groupme.bot_id),
            ("user_id", &groupme.user_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
        }

        let polling = &self.polling;
        let positive = [
            ("poll_window", polling.poll_window),
            ("page_size", polling.page_size),
            ("snapshot_window", polling.snapshot_window),
            ("snapshot_command_window", polling.snapshot_command_window),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
        }
        if polling.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if polling.snapshot_command_window > polling.snapshot_window {
            return Err(ConfigError::InvalidValue {
                field: "snapshot_command_window",
                reason: "must be <= snapshot_window".to_string(),
            }
            .into());
        }
        if groupme.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Polling settings for the application layer.
    #[must_use]
    pub fn poll_settings(&self) -> PollSettings {
        PollSettings::from(&self.polling)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
