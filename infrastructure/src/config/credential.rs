//! API key resolution
//!
//! The key is read from the environment variable named by
//! `gemini.api_key_env`, falling back to `GEMINI_API_KEY`.

use super::error::ConfigError;
use super::file_config::FileGeminiConfig;

pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Resolve the API key from the process environment.
pub fn resolve_api_key(config: &FileGeminiConfig) -> Result<String, ConfigError> {
    resolve_api_key_with(config, |name| std::env::var(name).ok())
}

/// Resolve the API key through `lookup`; blank values count as missing.
pub fn resolve_api_key_with<F>(config: &FileGeminiConfig, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let variables = candidate_variables(config);

    let key = variables
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty());

    key.ok_or(ConfigError::MissingCredential { variables })
}

fn candidate_variables(config: &FileGeminiConfig) -> Vec<String> {
    let mut variables = vec![config.api_key_env.clone()];
    if config.api_key_env != FALLBACK_API_KEY_ENV {
        variables.push(FALLBACK_API_KEY_ENV.to_string());
    }
    variables
}
