// src/services/telegram.rs

//! Message delivery through the Telegram Bot API.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use url::Url;

use crate::config::TelegramConfig;
use crate::error::{AppError, Result};

/// Trait for outbound message transports.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Send a text message to the fixed destination.
    async fn send(&self, text: &str) -> Result<()>;
}

/// Telegram Bot API transport bound to a single chat.
pub struct TelegramTransport {
    client: reqwest::Client,
    send_url: Url,
    chat_id: String,
}

impl TelegramTransport {
    /// Create a transport for the given bot token and chat.
    pub fn new(
        settings: &TelegramConfig,
        token: &str,
        chat_id: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        let base = Url::parse(&settings.api_base)?;
        let send_url = base.join(&format!("bot{token}/sendMessage"))?;

        Ok(Self {
            client,
            send_url,
            chat_id: chat_id.into(),
        })
    }
}

#[async_trait]
impl MessageTransport for TelegramTransport {
    async fn send(&self, text: &str) -> Result<()> {
        let response = self
            .client
            .post(self.send_url.clone())
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await
            .map_err(AppError::delivery)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::delivery(format!(
                "sendMessage returned {status}"
            )));
        }
        Ok(())
    }
}

/// Delivers rendered notifications, absorbing transport failures.
pub struct Notifier {
    transport: Box<dyn MessageTransport>,
}

impl Notifier {
    /// Create a notifier over the given transport.
    pub fn new(transport: Box<dyn MessageTransport>) -> Self {
        Self { transport }
    }

    /// Deliver a message to the chat.
    ///
    /// On transport failure, one retry is attempted with a wrapped
    /// failure notice. A second failure is logged and returned; callers
    /// must never treat it as fatal.
    pub async fn deliver(&self, message: &str) -> Result<()> {
        match self.transport.send(message).await {
            Ok(()) => {
                log::info!("Message delivered: {message}");
                Ok(())
            }
            Err(error) => {
                log::warn!("Message delivery failed: {error}");

                let notice = format!("Сбой в работе API сервиса: {error}");
                match self.transport.send(&notice).await {
                    Ok(()) => {
                        log::info!("Failure notice delivered: {notice}");
                        Ok(())
                    }
                    Err(retry_error) => {
                        log::error!("Failure notice delivery failed: {retry_error}");
                        Err(retry_error)
                    }
                }
            }
        }
    }
}
