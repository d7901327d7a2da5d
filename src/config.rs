// src/config.rs

//! Application configuration.
//!
//! Non-secret tuning lives in a TOML settings file; the three mandatory
//! credentials are read once from the environment into [`Secrets`] at
//! startup and passed down explicitly.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Environment variable holding the review-API token.
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat identifier.
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Root application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Review API settings
    #[serde(default)]
    pub review: ReviewConfig,

    /// Telegram delivery settings
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Polling cadence settings
    #[serde(default)]
    pub poll: PollConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load settings or return defaults if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Settings load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate settings values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.review.endpoint.trim().is_empty() {
            return Err(AppError::config("review.endpoint is empty"));
        }
        if self.telegram.api_base.trim().is_empty() {
            return Err(AppError::config("telegram.api_base is empty"));
        }
        if self.review.user_agent.trim().is_empty() {
            return Err(AppError::config("review.user_agent is empty"));
        }
        if self.poll.interval_secs == 0 {
            return Err(AppError::config("poll.interval_secs must be > 0"));
        }
        if self.review.timeout_secs == 0 {
            return Err(AppError::config("review.timeout_secs must be > 0"));
        }
        // A request that outlives the poll interval would stall the cadence.
        if self.review.timeout_secs >= self.poll.interval_secs {
            return Err(AppError::config(
                "review.timeout_secs must be shorter than poll.interval_secs",
            ));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            review: ReviewConfig::default(),
            telegram: TelegramConfig::default(),
            poll: PollConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Review API client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Homework status endpoint URL
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Telegram Bot API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot API base URL
    #[serde(default = "defaults::api_base")]
    pub api_base: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: defaults::api_base(),
        }
    }
}

/// Polling cadence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Seconds between poll cycles
    #[serde(default = "defaults::interval")]
    pub interval_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: defaults::interval(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level filter
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Review API defaults
    pub fn endpoint() -> String {
        "https://practicum.yandex.ru/api/user_api/homework_statuses/".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; homeward/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Telegram defaults
    pub fn api_base() -> String {
        "https://api.telegram.org".into()
    }

    // Poll defaults
    pub fn interval() -> u64 {
        600
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
}

/// Mandatory credentials read from the environment.
#[derive(Debug, Clone)]
pub struct Secrets {
    /// Review API bearer token
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Destination chat identifier
    pub telegram_chat_id: String,
}

impl Secrets {
    /// Read all mandatory credentials from the environment.
    ///
    /// Every variable is required; a missing or empty value is a fatal
    /// startup condition for the caller.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            practicum_token: require_var(PRACTICUM_TOKEN_VAR)?,
            telegram_token: require_var(TELEGRAM_TOKEN_VAR)?,
            telegram_chat_id: require_var(TELEGRAM_CHAT_ID_VAR)?,
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::config(format!(
            "Missing mandatory environment variable: {name}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_settings_ok() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let mut settings = Settings::default();
        settings.poll.interval_secs = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_endpoint() {
        let mut settings = Settings::default();
        settings.review.endpoint = "  ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn validate_rejects_timeout_longer_than_interval() {
        let mut settings = Settings::default();
        settings.review.timeout_secs = 700;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn load_reads_partial_file_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[poll]\ninterval_secs = 60").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.poll.interval_secs, 60);
        assert_eq!(settings.review.timeout_secs, 30);
        assert!(settings.review.endpoint.contains("homework_statuses"));
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let settings = Settings::load_or_default("definitely/not/here.toml");
        assert_eq!(settings.poll.interval_secs, 600);
    }
}
