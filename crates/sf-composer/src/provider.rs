//! Completion providers
//!
//! The composer talks to any chat-completion endpoint through the
//! [`CompletionProvider`] trait. The stock implementation targets the
//! OpenAI chat completions API; the key comes from `OPENAI_API_KEY` and
//! a missing key fails provider construction, not the first request.
//! Every call runs under a whole-request timeout.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ComposerError, ComposerResult};
use crate::prompts::PromptPair;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default chat completions endpoint base
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model when none is configured
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// A chat-completion backend
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &str;

    /// Run one prompt pair to completion and return the raw text
    async fn complete(&self, prompts: &PromptPair) -> ComposerResult<String>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// OPENAI WIRE TYPES
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
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
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// A blank or absent key is a configuration error, raised before any
/// request is made
fn resolve_key(raw: Option<String>) -> ComposerResult<String> {
    raw.filter(|k| !k.trim().is_empty())
        .ok_or(ComposerError::MissingApiKey)
}

/// OpenAI chat completions client
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl OpenAiProvider {
    /// Build from the environment, failing fast when the key is absent
    pub fn from_env() -> ComposerResult<Self> {
        let api_key = resolve_key(std::env::var(API_KEY_ENV).ok())?;
        Ok(Self::new(api_key))
    }

    /// Build with an explicit key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            timeout: Duration::from_secs(60),
        }
    }

    /// Point at a different endpoint base
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Select the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the whole-request timeout (default 60s)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured model name
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn request(&self, prompts: &PromptPair) -> ComposerResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompts.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompts.user,
                },
            ],
            temperature: self.temperature,
        };

        log::debug!("requesting completion from {} ({})", self.name(), self.model);
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(ComposerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ComposerError::EmptyResponse)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, prompts: &PromptPair) -> ComposerResult<String> {
        tokio::time::timeout(self.timeout, self.request(prompts))
            .await
            .map_err(|_| ComposerError::Timeout)?
    }
}
