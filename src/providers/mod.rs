// Text-generation capability
//
// The engine never talks to a specific LLM vendor. Every component receives an
// `Arc<dyn TextGenerator>` at construction time: either a network-backed
// provider or `NullGenerator`, which tells callers to take their heuristic path.

use async_trait::async_trait;
use std::sync::Arc;

pub mod openrouter;
pub mod retry;

pub use openrouter::OpenRouterProvider;
pub use retry::with_retry;

use crate::config::ModelConfig;

/// Why a generation request produced no usable text.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("no text-generation capability is configured")]
    Unavailable,

    #[error("provider returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("provider returned an empty response")]
    EmptyResponse,

    #[error("could not decode provider response: {0}")]
    Decode(String),
}

impl GenerationError {
    /// Whether repeating the same request might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Http { status, .. } => *status == 429 || *status >= 500,
            Self::Unavailable | Self::EmptyResponse | Self::Decode(_) => false,
        }
    }
}

/// A single prompt-in, text-out exchange with a language model.
///
/// `Ok(text)` is a successful reply; `Err` carries the failure reason.
/// Timeouts, retries and batching belong to the implementation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and wait for the complete reply.
    async fn call(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Identifier recorded on improvement steps that used this generator.
    fn model_id(&self) -> &str;

    /// False for the null implementation; components then use heuristics.
    fn is_available(&self) -> bool {
        true
    }
}

/// The "no model" capability. Always unavailable, every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGenerator;

#[async_trait]
impl TextGenerator for NullGenerator {
    async fn call(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable)
    }

    fn model_id(&self) -> &str {
        "none"
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Shared handle to the null capability.
pub fn null_generator() -> Arc<dyn TextGenerator> {
    Arc::new(NullGenerator)
}

/// Build the capability described by the model configuration.
///
/// A configured API key selects the OpenRouter provider; anything else (or a
/// provider that cannot be built) falls back to `NullGenerator`.
pub fn create_generator(config: &ModelConfig) -> Arc<dyn TextGenerator> {
    let Some(api_key) = config.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
        tracing::info!("No API key configured; using heuristic analysis only");
        return null_generator();
    };

    match OpenRouterProvider::from_config(api_key, config) {
        Ok(provider) => {
            tracing::info!("Using model '{}' via {}", config.model, config.base_url);
            Arc::new(provider)
        }
        Err(e) => {
            tracing::warn!("Failed to create provider, falling back to heuristics: {}", e);
            null_generator()
        }
    }
}
