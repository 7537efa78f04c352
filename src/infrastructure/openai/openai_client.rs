use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{
    application::interfaces::plan_generator::PlanGenerator,
    config::config_model::OpenAi as OpenAiConfig,
    domain::value_objects::user_plans::UserProfile,
};

pub const COACH_SYSTEM_PROMPT: &str = "Ты - фитнес-тренер и нутрициолог.";

/// Minimal chat-completion client built on reqwest. Works with any
/// OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorEnvelope {
    error: OpenAiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetails {
    #[serde(rename = "type")]
    type_: Option<String>,
    code: Option<String>,
    message: Option<String>,
}

pub fn build_plan_prompt(user_profile: &UserProfile) -> String {
    format!(
        "Составь персональный план питания и тренировок для человека:\n\
         - Возраст: {} лет\n\
         - Рост: {} см\n\
         - Вес: {} кг\n\
         - Цель: {}",
        user_profile.age, user_profile.height, user_profile.weight, user_profile.goal
    )
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        }
    }

    async fn ensure_success(resp: reqwest::Response, context: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let request_id = resp
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let body = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "<empty response body>".to_string(),
            Err(err) => format!("<failed to read response body: {err}>"),
        };

        let (error_type, error_code, error_message) =
            match serde_json::from_str::<OpenAiErrorEnvelope>(&body) {
                Ok(envelope) => (
                    envelope.error.type_,
                    envelope.error.code,
                    envelope.error.message,
                ),
                Err(_) => (None, None, None),
            };

        error!(
            status = %status,
            openai_request_id = ?request_id,
            openai_error_type = ?error_type,
            openai_error_code = ?error_code,
            openai_error_message = ?error_message,
            context = %context,
            "openai api request failed"
        );

        anyhow::bail!(
            "OpenAI API request failed: {} (status {}, request_id={:?})",
            context,
            status,
            request_id
        );
    }

    /// Sends one system and one user message and returns the first choice's text.
    pub async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };

        let resp = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "create chat completion").await?;

        let parsed: ChatCompletionResponse = resp.json().await?;
        debug!(choices = parsed.choices.len(), "openai chat completion received");

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| anyhow::anyhow!("OpenAI response has no message content"))
    }
}

#[async_trait]
impl PlanGenerator for OpenAiClient {
    async fn generate_plan(&self, user_profile: UserProfile) -> Result<String> {
        let prompt = build_plan_prompt(&user_profile);
        self.complete(COACH_SYSTEM_PROMPT, &prompt).await
    }
}
