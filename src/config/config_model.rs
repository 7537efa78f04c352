#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub database: Database,
    pub openai: OpenAi,
    pub telegram: Telegram,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    /// Request body limit in MiB.
    pub body_limit: u64,
    /// Per-request timeout in seconds.
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
    pub max_pool_size: u32,
}

#[derive(Debug, Clone)]
pub struct OpenAi {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct Telegram {
    pub bot_token: String,
    pub api_base_url: String,
    /// When false, `/auth/` only checks that the bot token is live and accepts any `hash`.
    pub verify_hash: bool,
    pub auth_max_age_secs: u64,
}
