// OpenRouter provider implementation
//
// OpenRouter exposes the OpenAI chat-completions format, so the same client
// works for any OpenAI-compatible endpoint by changing `base_url`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::retry::with_retry;
use super::{GenerationError, TextGenerator};
use crate::config::ModelConfig;

/// Chat-completions client for OpenRouter and compatible APIs.
#[derive(Clone)]
pub struct OpenRouterProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    system_message: String,
    max_tokens: u32,
    temperature: f32,
    retry_limit: u32,
}

impl OpenRouterProvider {
    /// Create a provider from the model section of the engine configuration.
    pub fn from_config(api_key: &str, config: &ModelConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {e}"))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            system_message: config.system_message.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            retry_limit: config.retry_limit,
        })
    }

    fn to_request<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.system_message,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    /// Send a single request (no retry)
    async fn send_once(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = self.to_request(prompt);

        tracing::debug!("Sending request to {} (model {})", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Decode(e.to_string()))?;

        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for OpenRouterProvider {
    async fn call(&self, prompt: &str) -> Result<String, GenerationError> {
        with_retry(self.retry_limit, || self.send_once(prompt)).await
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
