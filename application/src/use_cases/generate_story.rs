//! Generate Story use case.
//!
//! Asks the text model for a structured story. Any failure yields
//! [`Story::fallback`], so callers always receive a readable story.

use crate::ports::ai_gateway::{AiGateway, GatewayError, StructuredRequest};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, EventKind, NoConversationLogger,
};
use serde_json::json;
use std::sync::Arc;
use storybook_domain::{DomainError, Model, PromptTemplate, Story};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Reasons a story could not be generated.
///
/// Never escapes [`GenerateStoryUseCase::execute`]; it decides between the
/// generated story and the fallback.
#[derive(Error, Debug)]
pub enum GenerateStoryError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Invalid story: {0}")]
    InvalidStory(#[from] DomainError),
}

/// Use case for generating the story shown at start-up.
pub struct GenerateStoryUseCase {
    gateway: Arc<dyn AiGateway>,
    model: Model,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl GenerateStoryUseCase {
    pub fn new(gateway: Arc<dyn AiGateway>, model: Model) -> Self {
        Self {
            gateway,
            model,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Generate a story, falling back to the built-in one on any failure.
    ///
    /// Single attempt, no retry.
    pub async fn execute(&self) -> Story {
        match self.try_generate().await {
            Ok(story) => {
                info!(
                    "Generated story \"{}\" ({} pages)",
                    story.title(),
                    story.page_count()
                );
                self.conversation_logger.log(ConversationEvent::new(
                    EventKind::StoryGenerated,
                    &self.model,
                    json!({
                        "title": story.title(),
                        "pages": story.pages(),
                    }),
                ));
                story
            }
            Err(e) => {
                warn!("Story generation failed, using fallback story: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    EventKind::StoryFallback,
                    &self.model,
                    json!({
                        "error": e.to_string(),
                    }),
                ));
                Story::fallback()
            }
        }
    }

    /// Generate a story, surfacing the failure instead of falling back.
    pub async fn try_generate(&self) -> Result<Story, GenerateStoryError> {
        let request = StructuredRequest::new(PromptTemplate::story(), Story::response_schema());

        debug!("Requesting story from {}", self.model);
        let raw = self
            .gateway
            .generate_structured(&self.model, &request)
            .await?;

        Ok(Story::from_json(&raw)?)
    }
}
