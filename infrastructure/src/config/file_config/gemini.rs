//! Gemini configuration from TOML (`[gemini]` section)

use crate::gemini::{DEFAULT_BASE_URL, GeminiClientConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use storybook_domain::Model;

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// API root, without the `/v1beta` suffix
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Model for story generation
    pub story_model: Model,
    /// Model for page illustrations
    pub image_model: Model,
    /// Model for the chat assistant
    pub chat_model: Model,
    /// Per-request timeout; requests never time out when unset
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: "API_KEY".to_string(),
            story_model: Model::default_story(),
            image_model: Model::default_image(),
            chat_model: Model::default_chat(),
            timeout_seconds: None,
        }
    }
}

impl FileGeminiConfig {
    /// HTTP client settings for the given API key
    pub fn client_config(&self, api_key: impl Into<String>) -> GeminiClientConfig {
        GeminiClientConfig::new(api_key)
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout_seconds.map(Duration::from_secs))
    }
}
