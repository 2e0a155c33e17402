// Configuration loader
// Reads ~/.essay-engine/config.toml (or an explicit path), then applies
// environment overrides for the API key and model.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{API_KEY_ENV, CONFIG_RELATIVE_PATH, MODEL_ENV};
use super::settings::EngineConfig;

/// Load configuration from `path`, or from the default location when `None`.
///
/// An explicit path must exist. The default file is optional: when it is
/// missing the built-in defaults are used.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let mut config = match path {
        Some(explicit) => {
            if !explicit.exists() {
                bail!("Configuration file not found: {}", explicit.display());
            }
            read_config_file(explicit)?
        }
        None => match default_config_path() {
            Some(default) if default.exists() => read_config_file(&default)?,
            _ => {
                tracing::debug!("No config file found, using defaults");
                EngineConfig::default()
            }
        },
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

/// `~/.essay-engine/config.toml`, if a home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_RELATIVE_PATH))
}

fn read_config_file(path: &Path) -> Result<EngineConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;

    let config: EngineConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;

    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Apply `OPENROUTER_API_KEY` and `OPENROUTER_MODEL` on top of file values.
///
/// Empty variables are ignored.
pub fn apply_env_overrides<F>(config: &mut EngineConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
        config.model.api_key = Some(key);
    }
    if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
        config.model.model = model;
    }
}
