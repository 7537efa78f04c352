use anyhow::{Context, Result, bail};
use url::Url;

use super::config_model::{Database, DotEnvyConfig, OpenAi, Server, Telegram};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
const DEFAULT_TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    load_from(|key| std::env::var(key).ok())
}

pub(crate) fn load_from<F>(lookup: F) -> Result<DotEnvyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
    let required = |key: &str| var(key).with_context(|| format!("{key} is invalid"));

    let server = Server {
        port: parse_or(var("SERVER_PORT"), 8000, "SERVER_PORT")?,
        body_limit: parse_or(var("SERVER_BODY_LIMIT"), 1, "SERVER_BODY_LIMIT")?,
        timeout: parse_or(var("SERVER_TIMEOUT"), 120, "SERVER_TIMEOUT")?,
    };

    let database = Database {
        url: required("DATABASE_URL")?,
        max_pool_size: parse_or(var("DATABASE_MAX_POOL_SIZE"), 10, "DATABASE_MAX_POOL_SIZE")?,
    };
    if database.max_pool_size == 0 {
        bail!("DATABASE_MAX_POOL_SIZE must be greater than zero");
    }

    let openai = OpenAi {
        api_key: required("OPENAI_API_KEY")?,
        model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
        base_url: base_url(var("OPENAI_BASE_URL"), DEFAULT_OPENAI_BASE_URL, "OPENAI_BASE_URL")?,
    };

    let telegram = Telegram {
        bot_token: required("TELEGRAM_BOT_TOKEN")?,
        api_base_url: base_url(
            var("TELEGRAM_API_BASE_URL"),
            DEFAULT_TELEGRAM_API_BASE_URL,
            "TELEGRAM_API_BASE_URL",
        )?,
        verify_hash: match var("TELEGRAM_VERIFY_HASH") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("TELEGRAM_VERIFY_HASH is invalid (value: {raw})"))?,
            None => true,
        },
        auth_max_age_secs: parse_or(
            var("TELEGRAM_AUTH_MAX_AGE_SECS"),
            86_400,
            "TELEGRAM_AUTH_MAX_AGE_SECS",
        )?,
    };

    Ok(DotEnvyConfig {
        server,
        database,
        openai,
        telegram,
    })
}

fn parse_or<T>(raw: Option<String>, default: T, key: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} is invalid (value: {raw})")),
        None => Ok(default),
    }
}

/// Validates the URL and strips the trailing slash so paths can be appended with `format!`.
fn base_url(raw: Option<String>, default: &str, key: &str) -> Result<String> {
    let raw = raw.unwrap_or_else(|| default.to_string());
    Url::parse(&raw).with_context(|| format!("{key} is not a valid URL"))?;
    Ok(raw.trim_end_matches('/').to_string())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
