use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AssistError;

pub const API_KEY_ENV: &str = "SQL_DRILL_AI_API_KEY";
pub const BASE_URL_ENV: &str = "SQL_DRILL_AI_BASE_URL";
pub const MODEL_ENV: &str = "SQL_DRILL_AI_MODEL";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl AssistantConfig {
    /// Read the assistant credentials from the environment.
    ///
    /// Returns `None` when no API key is set, which disables the assistant.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var(API_KEY_ENV).ok()?;
        Self::new(
            api_key,
            env::var(BASE_URL_ENV).ok(),
            env::var(MODEL_ENV).ok(),
        )
    }

    /// Build a config, filling unset or blank values with defaults.
    ///
    /// Returns `None` for a blank API key.
    #[must_use]
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Option<Self> {
        if api_key.trim().is_empty() {
            return None;
        }
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Some(Self {
            base_url: non_blank(base_url).unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            api_key: api_key.trim().to_string(),
            model: non_blank(model).unwrap_or_else(|| DEFAULT_MODEL.into()),
        })
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// A text completion backend: one prompt in, one text out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    fn model(&self) -> &str;

    /// # Errors
    ///
    /// Returns `AssistError` when the request fails or yields no content.
    async fn complete(&self, prompt: &str) -> Result<String, AssistError>;
}

/// OpenAI-compatible chat completions over HTTP.
#[derive(Clone)]
pub struct HttpCompletionClient {
    client: Client,
    config: AssistantConfig,
}

impl HttpCompletionClient {
    #[must_use]
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, AssistError> {
        let payload = ChatRequest::user(&self.config.model, prompt);

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssistError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        body.first_text().ok_or(AssistError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

impl ChatRequest {
    fn user(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: 0.2,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

impl ChatResponse {
    fn first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
