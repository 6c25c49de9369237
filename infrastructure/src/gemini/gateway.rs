//! Gemini AI gateway implementation

use crate::gemini::client::{GeminiClient, GeminiClientConfig};
use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::{
    Content, GenerateContentRequest, GenerationConfig, ImageInstance, ImageParameters,
    OutputOptions, PredictRequest,
};
use crate::gemini::session::GeminiChatSession;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::sync::Arc;
use storybook_application::{
    AiChatSession, AiGateway, GatewayError, GeneratedImage, ImageRequest, StructuredRequest,
};
use storybook_domain::{ChatTurn, Model};
use tracing::{debug, info};

/// AI gateway backed by the Gemini REST API
pub struct GeminiGateway {
    client: Arc<GeminiClient>,
}

impl GeminiGateway {
    pub fn new(config: &GeminiClientConfig) -> std::result::Result<Self, GatewayError> {
        let client = GeminiClient::new(config)
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!("GeminiGateway initialized ({})", config.base_url);

        Ok(Self {
            client: Arc::new(client),
        })
    }

    async fn structured(&self, model: &Model, request: &StructuredRequest) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content::user(request.prompt.clone())],
            system_instruction: None,
            generation_config: Some(GenerationConfig::json(request.schema.clone())),
        };

        let response = self.client.generate_content(model, &body).await?;
        if let Some(reason) = response.block_reason() {
            return Err(GeminiError::Blocked(reason));
        }
        response.text().ok_or(GeminiError::EmptyResponse)
    }

    async fn images(&self, model: &Model, request: &ImageRequest) -> Result<Vec<GeneratedImage>> {
        let body = PredictRequest {
            instances: vec![ImageInstance {
                prompt: request.prompt.clone(),
            }],
            parameters: ImageParameters {
                sample_count: request.count,
                aspect_ratio: request.aspect_ratio.clone(),
                output_options: OutputOptions {
                    mime_type: request.mime_type.clone(),
                },
            },
        };

        let response = self.client.predict(model, &body).await?;

        let mut images = Vec::with_capacity(response.predictions.len());
        let mut filtered = None;
        for prediction in response.predictions {
            match prediction.bytes_base64_encoded {
                Some(encoded) => images.push(GeneratedImage {
                    mime_type: prediction
                        .mime_type
                        .unwrap_or_else(|| request.mime_type.clone()),
                    bytes: STANDARD.decode(encoded)?,
                }),
                None => filtered = filtered.or(prediction.rai_filtered_reason),
            }
        }

        if images.is_empty() {
            if let Some(reason) = filtered {
                return Err(GeminiError::Blocked(reason));
            }
        }
        debug!("Received {} image(s) from {}", images.len(), model);
        Ok(images)
    }
}

#[async_trait]
impl AiGateway for GeminiGateway {
    async fn generate_structured(
        &self,
        model: &Model,
        request: &StructuredRequest,
    ) -> std::result::Result<String, GatewayError> {
        Ok(self.structured(model, request).await?)
    }

    async fn generate_images(
        &self,
        model: &Model,
        request: &ImageRequest,
    ) -> std::result::Result<Vec<GeneratedImage>, GatewayError> {
        Ok(self.images(model, request).await?)
    }

    async fn create_chat_session(
        &self,
        model: &Model,
        system_instruction: &str,
        history: &[ChatTurn],
    ) -> std::result::Result<Box<dyn AiChatSession>, GatewayError> {
        // Sessions are client-side; nothing goes over the wire until the first send
        Ok(Box::new(GeminiChatSession::new(
            Arc::clone(&self.client),
            model.clone(),
            system_instruction,
            history,
        )))
    }
}
