//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod chat;
mod gemini;
mod image;
mod logging;
mod output;
mod repl;
mod speech;

pub use chat::FileChatConfig;
pub use gemini::FileGeminiConfig;
pub use image::FileImageConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use speech::FileSpeechConfig;

use serde::{Deserialize, Serialize};
use storybook_application::GatewayConfig;
use storybook_domain::PromptTemplate;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("gemini.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty ({field})")]
    EmptyModelName { field: &'static str },

    #[error("image.mime_type cannot be empty")]
    EmptyMimeType,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini endpoint, credential variable and model selection
    pub gemini: FileGeminiConfig,
    /// Illustration settings
    pub image: FileImageConfig,
    /// Chat assistant settings
    pub chat: FileChatConfig,
    /// Read-aloud settings
    pub speech: FileSpeechConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.gemini.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        let models = [
            ("gemini.story_model", &self.gemini.story_model),
            ("gemini.image_model", &self.gemini.image_model),
            ("gemini.chat_model", &self.gemini.chat_model),
        ];
        for (field, model) in models {
            if model.as_str().trim().is_empty() {
                return Err(ConfigValidationError::EmptyModelName { field });
            }
        }

        if self.image.mime_type.trim().is_empty() {
            return Err(ConfigValidationError::EmptyMimeType);
        }

        Ok(())
    }

    /// Use case configuration derived from this file configuration
    pub fn to_gateway_config(&self) -> GatewayConfig {
        let instruction = self
            .chat
            .system_instruction
            .clone()
            .unwrap_or_else(|| PromptTemplate::chat_system().to_string());

        let mut config = GatewayConfig::default()
            .with_story_model(self.gemini.story_model.clone())
            .with_image_model(self.gemini.image_model.clone())
            .with_chat_model(self.gemini.chat_model.clone())
            .with_chat_system_instruction(instruction);
        config.image_mime_type = self.image.mime_type.clone();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use storybook_domain::{ImageQuality, Model};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
api_key_env = "STORY_KEY"
story_model = "gemini-2.5-pro"
timeout_seconds = 60

[image]
default_quality = "high"
output_dir = "pictures"

[chat]
system_instruction = "Talk like a pirate."

[speech]
command = "espeak-ng"
args = ["-s", "140"]

[logging]
conversation_log = "storybook.jsonl"

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key_env, "STORY_KEY");
        assert_eq!(config.gemini.story_model, Model::Gemini25Pro);
        assert_eq!(config.gemini.image_model, Model::default_image());
        assert_eq!(config.gemini.timeout_seconds, Some(60));
        assert_eq!(config.image.default_quality, ImageQuality::High);
        assert_eq!(config.image.output_dir, Some(PathBuf::from("pictures")));
        assert_eq!(config.speech.command.as_deref(), Some("espeak-ng"));
        assert_eq!(config.speech.args, vec!["-s", "140"]);
        assert_eq!(
            config.logging.conversation_log,
            Some(PathBuf::from("storybook.jsonl"))
        );
        assert!(!config.output.color);
        assert!(config.output.show_progress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.gemini.api_key_env, "API_KEY");
        assert_eq!(config.image.default_quality, ImageQuality::Low);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config: FileConfig = toml::from_str("[gemini]\ntimeout_seconds = 0").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_empty_model_name() {
        let config: FileConfig = toml::from_str("[gemini]\nchat_model = \" \"").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName {
                field: "gemini.chat_model"
            })
        );
    }

    #[test]
    fn test_to_gateway_config() {
        let config: FileConfig = toml::from_str(
            r#"
[gemini]
image_model = "imagen-4.0-fast-generate-001"

[chat]
system_instruction = "Talk like a pirate."
"#,
        )
        .unwrap();

        let gateway = config.to_gateway_config();
        assert_eq!(gateway.image_model, Model::Imagen4Fast);
        assert_eq!(gateway.chat_system_instruction, "Talk like a pirate.");
        assert_eq!(gateway.image_mime_type, "image/jpeg");
    }

    #[test]
    fn test_default_chat_instruction() {
        let gateway = FileConfig::default().to_gateway_config();
        assert_eq!(
            gateway.chat_system_instruction,
            PromptTemplate::chat_system()
        );
    }
}
