//! Models and instructions used by the storybook use cases.

use storybook_domain::{Model, PromptTemplate};

/// Use case configuration.
///
/// Built from file configuration by the binary; defaults match the models
/// and instructions the storybook ships with.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Model for story generation
    pub story_model: Model,
    /// Model for page illustrations
    pub image_model: Model,
    /// Model for the chat assistant
    pub chat_model: Model,
    /// System instruction seeding every chat session
    pub chat_system_instruction: String,
    /// Output format requested for illustrations
    pub image_mime_type: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            story_model: Model::default_story(),
            image_model: Model::default_image(),
            chat_model: Model::default_chat(),
            chat_system_instruction: PromptTemplate::chat_system().to_string(),
            image_mime_type: "image/jpeg".to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn with_story_model(mut self, model: Model) -> Self {
        self.story_model = model;
        self
    }

    pub fn with_image_model(mut self, model: Model) -> Self {
        self.image_model = model;
        self
    }

    pub fn with_chat_model(mut self, model: Model) -> Self {
        self.chat_model = model;
        self
    }

    pub fn with_chat_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.chat_system_instruction = instruction.into();
        self
    }
}
