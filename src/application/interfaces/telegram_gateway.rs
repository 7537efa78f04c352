use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

#[async_trait]
#[automock]
pub trait TelegramGateway {
    /// `Ok(false)` when Telegram answers `getMe` with anything but 200.
    async fn is_bot_token_valid(&self) -> Result<bool>;
}
