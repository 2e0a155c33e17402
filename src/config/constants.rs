// Project-wide constants
//
// Defaults for the model connection and the improvement loop live here so the
// config structs, the loader and the CLI agree on one value.

/// OpenAI-compatible endpoint used when no `base_url` is configured.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Model identifier used when neither the config file nor `OPENROUTER_MODEL` names one.
pub const DEFAULT_MODEL: &str = "anthropic/claude-3-haiku";

pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful assistant.";

pub const DEFAULT_MAX_TOKENS: u32 = 1000;

pub const DEFAULT_TEMPERATURE: f32 = 1.0;

/// Attempts per generation request, including the first.
pub const DEFAULT_RETRY_LIMIT: u32 = 3;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Improvement cycles when the caller does not pass `--cycles`.
pub const DEFAULT_CYCLES: usize = 3;

/// Overall score at which the improvement loop stops.
pub const DEFAULT_TARGET_SCORE: f64 = 85.0;

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Environment variable overriding the model identifier.
pub const MODEL_ENV: &str = "OPENROUTER_MODEL";

/// Config file location relative to the home directory.
pub const CONFIG_RELATIVE_PATH: &str = ".essay-engine/config.toml";
