use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::{
    application::interfaces::telegram_gateway::TelegramGateway,
    config::config_model::Telegram as TelegramConfig,
};

/// Bot API client. The token is part of every request path, so URLs built here
/// must never be logged.
pub struct TelegramClient {
    http: reqwest::Client,
    api_base_url: String,
    bot_token: String,
}

impl TelegramClient {
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base_url: config.api_base_url.clone(),
            bot_token: config.bot_token.clone(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base_url, self.bot_token, method)
    }
}

#[async_trait]
impl TelegramGateway for TelegramClient {
    async fn is_bot_token_valid(&self) -> Result<bool> {
        let resp = self
            .http
            .get(self.method_url("getMe"))
            .send()
            .await
            .map_err(|err| {
                anyhow::anyhow!("telegram getMe request failed: {}", err.without_url())
            })?;

        let status = resp.status();
        if status == StatusCode::OK {
            debug!("telegram getMe succeeded");
            return Ok(true);
        }

        warn!(status = %status, "telegram getMe returned non-200 status");
        Ok(false)
    }
}
