// src/error.rs

//! Unified error handling for the notifier application.

use thiserror::Error;

/// Result type alias for notifier operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed at the transport level
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Review endpoint answered with a non-success status
    #[error("Endpoint {endpoint} is unavailable. API response code: {status_code}")]
    UpstreamUnavailable { status_code: u16, endpoint: String },

    /// Response body was not the expected JSON
    #[error("Malformed API payload: {0}")]
    MalformedPayload(String),

    /// Homework status not listed in the catalog
    #[error("Undocumented homework status: {0}")]
    UndocumentedStatus(String),

    /// Message delivery to the chat failed
    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a malformed-payload error.
    pub fn malformed(message: impl std::fmt::Display) -> Self {
        Self::MalformedPayload(message.to_string())
    }

    /// Create a delivery error.
    pub fn delivery(message: impl std::fmt::Display) -> Self {
        Self::Delivery(message.to_string())
    }

    /// Whether this failure is promoted to a user-visible alert.
    ///
    /// Transport failures and malformed payloads self-heal on the next
    /// cycle and stay in the logs. Everything else indicates either an
    /// unavailable upstream or a contract change and must surface to the
    /// user (once per process lifetime, see the poll loop).
    pub fn escalates(&self) -> bool {
        !matches!(self, Self::Http(_) | Self::MalformedPayload(_))
    }
}
