use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    application::interfaces::telegram_gateway::TelegramGateway,
    config::config_model::Telegram as TelegramConfig,
    domain::value_objects::telegram_logins::{AuthResponse, TelegramLogin},
};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid Telegram authentication")]
    InvalidAuthentication { reason: &'static str },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            AuthError::InvalidAuthentication { .. } => StatusCode::BAD_REQUEST,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, AuthError>;

/// Verifies Telegram Login Widget data.
///
/// With `verify_hash` disabled only the bot token is checked against `getMe`, so
/// any caller-supplied `hash` is accepted. That mode exists for compatibility
/// with clients that never sent a real signature and is not authentication.
pub struct AuthUseCase<T>
where
    T: TelegramGateway + Send + Sync + 'static,
{
    telegram_gateway: Arc<T>,
    config: TelegramConfig,
}

impl<T> AuthUseCase<T>
where
    T: TelegramGateway + Send + Sync + 'static,
{
    pub fn new(telegram_gateway: Arc<T>, config: TelegramConfig) -> Self {
        if !config.verify_hash {
            warn!("auth: TELEGRAM_VERIFY_HASH is disabled, login hashes will not be checked");
        }

        Self {
            telegram_gateway,
            config,
        }
    }

    pub async fn authenticate(&self, login: TelegramLogin) -> UseCaseResult<AuthResponse> {
        let telegram_id = login.telegram_id;

        if self.config.verify_hash {
            if !login.signature_matches(&self.config.bot_token) {
                return Err(self.reject(telegram_id, "hash mismatch"));
            }

            let now = Utc::now().timestamp();
            if login.is_expired(now, self.config.auth_max_age_secs) {
                return Err(self.reject(telegram_id, "auth_date expired"));
            }

            if login.is_from_future(now) {
                return Err(self.reject(telegram_id, "auth_date in the future"));
            }
        }

        let token_is_live = self
            .telegram_gateway
            .is_bot_token_valid()
            .await
            .map_err(|err| {
                error!(
                    telegram_id,
                    error = ?err,
                    "auth: telegram getMe request failed"
                );
                AuthError::Internal(err)
            })?;

        if !token_is_live {
            return Err(self.reject(telegram_id, "bot token rejected by getMe"));
        }

        info!(
            telegram_id,
            hash_checked = self.config.verify_hash,
            "auth: telegram login accepted"
        );

        Ok(AuthResponse::successful(telegram_id))
    }

    fn reject(&self, telegram_id: i64, reason: &'static str) -> AuthError {
        let err = AuthError::InvalidAuthentication { reason };
        warn!(
            telegram_id,
            reason,
            status = err.status_code().as_u16(),
            "auth: telegram login rejected"
        );
        err
    }
}
