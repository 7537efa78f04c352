use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// How far ahead of the server clock an `auth_date` may be.
pub const AUTH_DATE_CLOCK_SKEW_SECS: i64 = 60;

/// Query parameters forwarded from the Telegram Login Widget.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TelegramLogin {
    pub telegram_id: i64,
    pub first_name: String,
    pub auth_date: i64,
    pub hash: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl TelegramLogin {
    /// `key=value` lines sorted by key, as Telegram signs them. The identifier is
    /// signed under Telegram's own field name `id`.
    pub fn data_check_string(&self) -> String {
        let mut fields = vec![
            ("auth_date", self.auth_date.to_string()),
            ("first_name", self.first_name.clone()),
            ("id", self.telegram_id.to_string()),
        ];

        let optional = [
            ("last_name", &self.last_name),
            ("photo_url", &self.photo_url),
            ("username", &self.username),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                fields.push((key, value.clone()));
            }
        }

        fields.sort_by_key(|(key, _)| *key);

        fields
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Checks `hash` against HMAC-SHA256(SHA256(bot_token), data_check_string).
    pub fn signature_matches(&self, bot_token: &str) -> bool {
        let Ok(provided) = hex::decode(self.hash.trim()) else {
            return false;
        };

        let secret_key = Sha256::digest(bot_token.as_bytes());
        let Ok(mut mac) = HmacSha256::new_from_slice(&secret_key) else {
            return false;
        };
        mac.update(self.data_check_string().as_bytes());

        mac.verify_slice(&provided).is_ok()
    }

    pub fn is_expired(&self, now_unix: i64, max_age_secs: u64) -> bool {
        let max_age = i64::try_from(max_age_secs).unwrap_or(i64::MAX);
        now_unix.saturating_sub(self.auth_date) > max_age
    }

    pub fn is_from_future(&self, now_unix: i64) -> bool {
        self.auth_date.saturating_sub(now_unix) > AUTH_DATE_CLOCK_SKEW_SECS
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub message: String,
    pub telegram_id: i64,
}

impl AuthResponse {
    pub fn successful(telegram_id: i64) -> Self {
        Self {
            message: "Authentication successful".to_string(),
            telegram_id,
        }
    }
}
