//! Storybook gateway.
//!
//! Single entry point the surrounding UI talks to. Bundles the story, image
//! and chat use cases over one [`AiGateway`] adapter. None of its operations
//! fail: remote errors turn into fallback values inside the use cases.

use crate::config::GatewayConfig;
use crate::ports::ai_gateway::AiGateway;
use crate::ports::conversation_logger::ConversationLogger;
use crate::use_cases::chat_relay::{ChatRelay, ChatState};
use crate::use_cases::generate_image::GenerateImageUseCase;
use crate::use_cases::generate_story::GenerateStoryUseCase;
use std::sync::Arc;
use storybook_domain::{ChatTurn, ImageQuality, ImageReference, Story};

pub struct StorybookGateway {
    story: GenerateStoryUseCase,
    image: GenerateImageUseCase,
    chat: ChatRelay,
}

impl StorybookGateway {
    pub fn new(gateway: Arc<dyn AiGateway>, config: GatewayConfig) -> Self {
        Self {
            story: GenerateStoryUseCase::new(Arc::clone(&gateway), config.story_model),
            image: GenerateImageUseCase::new(Arc::clone(&gateway), config.image_model)
                .with_mime_type(config.image_mime_type),
            chat: ChatRelay::new(
                gateway,
                config.chat_model,
                config.chat_system_instruction,
            ),
        }
    }

    /// Route conversation events from all three use cases to `logger`.
    pub fn with_conversation_logger(self, logger: Arc<dyn ConversationLogger>) -> Self {
        Self {
            story: self.story.with_conversation_logger(Arc::clone(&logger)),
            image: self.image.with_conversation_logger(Arc::clone(&logger)),
            chat: self.chat.with_conversation_logger(logger),
        }
    }

    /// Generate a story; the fallback story on failure.
    pub async fn generate_story(&self) -> Story {
        self.story.execute().await
    }

    /// Illustrate a page; a placeholder image on failure.
    pub async fn generate_image(&self, scene: &str, quality: ImageQuality) -> ImageReference {
        self.image.execute(scene, quality).await
    }

    /// Send a chat message; an apology on failure.
    pub async fn send_message(&self, prior_turns: &[ChatTurn], new_text: &str) -> String {
        self.chat.send_message(prior_turns, new_text).await
    }

    pub async fn reset_chat(&self) {
        self.chat.reset().await;
    }

    pub async fn chat_state(&self) -> ChatState {
        self.chat.state().await
    }
}
