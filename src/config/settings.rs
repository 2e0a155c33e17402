// Configuration structs

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::constants::*;

/// Complete engine configuration, as read from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub improve: ImproveConfig,

    #[serde(default)]
    pub optimize: OptimizeConfig,
}

/// Connection settings for the text-generation provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// API key; when absent the engine runs on heuristics only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Provider model identifier (e.g. "anthropic/claude-3-haiku")
    #[serde(default = "default_model")]
    pub model: String,

    /// OpenAI-compatible base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature (0.0 to 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Attempts per request, first attempt included
    #[serde(default = "default_retry_limit")]
    pub retry_limit: u32,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_system_message")]
    pub system_message: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            retry_limit: DEFAULT_RETRY_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            system_message: default_system_message(),
        }
    }
}

/// Defaults for the improvement loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImproveConfig {
    #[serde(default = "default_cycles")]
    pub cycles: usize,

    #[serde(default = "default_target_score")]
    pub target_score: f64,
}

impl Default for ImproveConfig {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

/// Defaults for the style optimizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeConfig {
    /// Flesch-Kincaid grade above which a clarity warning is raised
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_grade_level: Option<f64>,

    #[serde(default = "default_true")]
    pub prefer_active_voice: bool,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            target_grade_level: None,
            prefer_active_voice: true,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_retry_limit() -> u32 {
    DEFAULT_RETRY_LIMIT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_system_message() -> String {
    DEFAULT_SYSTEM_MESSAGE.to_string()
}

fn default_cycles() -> usize {
    DEFAULT_CYCLES
}

fn default_target_score() -> f64 {
    DEFAULT_TARGET_SCORE
}

fn default_true() -> bool {
    true
}

impl EngineConfig {
    /// Validate configuration and return helpful errors
    pub fn validate(&self) -> Result<()> {
        let model = &self.model;
        if model.model.trim().is_empty() {
            bail!("model.model must not be empty");
        }
        if !(0.0..=2.0).contains(&model.temperature) {
            bail!(
                "model.temperature must be between 0.0 and 2.0 (got {})",
                model.temperature
            );
        }
        if model.max_tokens == 0 {
            bail!("model.max_tokens must be greater than 0");
        }
        if model.timeout_secs == 0 {
            bail!("model.timeout_secs must be greater than 0");
        }
        if !(0.0..=100.0).contains(&self.improve.target_score) {
            bail!(
                "improve.target_score must be between 0 and 100 (got {})",
                self.improve.target_score
            );
        }
        if let Some(grade) = self.optimize.target_grade_level {
            if grade < 0.0 {
                bail!("optimize.target_grade_level must not be negative (got {grade})");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.model.model, "anthropic/claude-3-haiku");
        assert_eq!(config.model.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.improve.cycles, 3);
        assert!((config.improve.target_score - 85.0).abs() < f64::EPSILON);
        assert!(config.optimize.prefer_active_voice);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
            [model]
            model = "openai/gpt-4o-mini"
            temperature = 0.3

            [improve]
            cycles = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.model.model, "openai/gpt-4o-mini");
        assert!((config.model.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.model.max_tokens, 1000);
        assert_eq!(config.improve.cycles, 5);
        assert!((config.improve.target_score - 85.0).abs() < f64::EPSILON);
        assert!(config.optimize.target_grade_level.is_none());
    }

    #[test]
    fn test_rejects_out_of_range_temperature() {
        let mut config = EngineConfig::default();
        config.model.temperature = 2.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_target() {
        let mut config = EngineConfig::default();
        config.improve.target_score = 120.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_max_tokens() {
        let mut config = EngineConfig::default();
        config.model.max_tokens = 0;
        assert!(config.validate().is_err());
    }
}
