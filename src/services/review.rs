// src/services/review.rs

//! Review API client.
//!
//! Fetches homework statuses updated since a given watermark timestamp.

use reqwest::header::AUTHORIZATION;
use url::Url;

use crate::config::ReviewConfig;
use crate::error::{AppError, Result};
use crate::models::StatusResponse;
use crate::utils::http;

/// Client for the homework status endpoint.
pub struct ReviewClient {
    client: reqwest::Client,
    endpoint: Url,
    token: String,
}

impl ReviewClient {
    /// Create a new client with the given settings and bearer token.
    pub fn new(settings: &ReviewConfig, token: impl Into<String>) -> Result<Self> {
        let client = http::create_client(&settings.user_agent, settings.timeout_secs)?;
        let endpoint = Url::parse(&settings.endpoint)?;

        Ok(Self {
            client,
            endpoint,
            token: token.into(),
        })
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Fetch homework statuses updated since `from_date`.
    ///
    /// A transport-level failure (connect error, timeout) returns before
    /// any response is inspected. A non-success HTTP status maps to
    /// [`AppError::UpstreamUnavailable`]; a body that is not valid JSON
    /// maps to the recoverable [`AppError::MalformedPayload`].
    pub async fn fetch(&self, from_date: i64) -> Result<StatusResponse> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamUnavailable {
                status_code: status.as_u16(),
                endpoint: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(AppError::malformed)
    }
}
