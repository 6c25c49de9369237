//! Generate Image use case.
//!
//! Illustrates one page at a chosen quality tier. The returned image is
//! always displayable: an inline data URI on success, a random placeholder
//! URL on failure.

use crate::ports::ai_gateway::{AiGateway, GatewayError, ImageRequest};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, EventKind, NoConversationLogger,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;
use std::sync::Arc;
use storybook_domain::util::preview;
use storybook_domain::{ImageQuality, ImageReference, Model, PromptTemplate};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Reasons an illustration could not be generated.
#[derive(Error, Debug)]
pub enum GenerateImageError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("No image in response")]
    NoImage,
}

/// Use case for illustrating a story page.
///
/// Every call is independent: nothing is cached between identical prompts.
pub struct GenerateImageUseCase {
    gateway: Arc<dyn AiGateway>,
    model: Model,
    mime_type: String,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl GenerateImageUseCase {
    pub fn new(gateway: Arc<dyn AiGateway>, model: Model) -> Self {
        Self {
            gateway,
            model,
            mime_type: "image/jpeg".to_string(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Illustrate `scene`, falling back to a placeholder on any failure.
    pub async fn execute(&self, scene: &str, quality: ImageQuality) -> ImageReference {
        let prompt = PromptTemplate::illustration(scene, quality);

        match self.try_generate(&prompt).await {
            Ok(image) => {
                info!("Generated {} illustration", quality);
                self.conversation_logger.log(ConversationEvent::new(
                    EventKind::ImageGenerated,
                    &self.model,
                    json!({
                        "quality": quality.as_str(),
                        "prompt": prompt,
                    }),
                ));
                image
            }
            Err(e) => {
                let placeholder = ImageReference::placeholder(rand::random::<u64>());
                warn!("Image generation failed, using placeholder: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    EventKind::ImageFallback,
                    &self.model,
                    json!({
                        "quality": quality.as_str(),
                        "prompt": prompt,
                        "error": e.to_string(),
                        "placeholder": placeholder.to_uri(),
                    }),
                ));
                placeholder
            }
        }
    }

    /// Request exactly one square image for a complete prompt.
    pub async fn try_generate(&self, prompt: &str) -> Result<ImageReference, GenerateImageError> {
        let request = ImageRequest::single_square(prompt).with_mime_type(self.mime_type.clone());

        debug!("Requesting image from {}: {}", self.model, preview(prompt, 80));
        let images = self.gateway.generate_images(&self.model, &request).await?;

        let image = images
            .into_iter()
            .find(|image| !image.bytes.is_empty())
            .ok_or(GenerateImageError::NoImage)?;

        Ok(ImageReference::inline(
            image.mime_type,
            STANDARD.encode(&image.bytes),
        ))
    }
}
