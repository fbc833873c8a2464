use std::time::Duration;

use reqwest::Client;
use tracing::info;

use super::error::TelegramError;
use super::types::{SendMessageRequest, SendMessageResponse};
use crate::error::BotError;

/// Delivers a finished message to the one destination the bot reports to.
pub trait Notifier {
    async fn notify(&self, message: &str) -> Result<(), BotError>;
}

pub struct TelegramClient {
    token: String,
    chat_id: String,
    client: Client,
    base_url: String,
}

impl TelegramClient {
    pub fn new(
        token: String,
        chat_id: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            token,
            chat_id,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn send_message(&self, text: &str) -> Result<(), TelegramError> {
        let req = SendMessageRequest {
            chat_id: self.chat_id.clone(),
            text: text.to_string(),
        };
        let response = self
            .client
            .post(format!("{}/bot{}/sendMessage", self.base_url, self.token))
            .json(&req)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let envelope = serde_json::from_str::<SendMessageResponse>(&body).ok();

        match envelope {
            Some(env) if status.is_success() && env.ok => Ok(()),
            Some(env) => Err(TelegramError::Api {
                status: status.as_u16(),
                description: env.description.unwrap_or_else(|| "unknown error".to_string()),
            }),
            None => Err(TelegramError::Api {
                status: status.as_u16(),
                description: body,
            }),
        }
    }
}

impl Notifier for TelegramClient {
    async fn notify(&self, message: &str) -> Result<(), BotError> {
        info!("sending message to chat {}", self.chat_id);
        self.send_message(message)
            .await
            .map_err(|source| BotError::DeliverySend {
                message: message.to_string(),
                source,
            })?;
        info!(text = message, "message delivered");
        Ok(())
    }
}
