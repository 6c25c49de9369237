//! AI gateway port
//!
//! Defines the interface for talking to the generative AI service: one-shot
//! structured text, image generation, and multi-turn chat sessions.

use async_trait::async_trait;
use serde_json::Value;
use storybook_domain::{ChatTurn, Model};
use thiserror::Error;

/// Errors that can occur during AI gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Content blocked: {0}")]
    Blocked(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Request for JSON output constrained by a schema
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    pub prompt: String,
    /// Response schema in the service's OpenAPI subset
    pub schema: Value,
}

impl StructuredRequest {
    pub fn new(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            schema,
        }
    }
}

/// Aspect ratio of every illustration
pub const SQUARE_ASPECT_RATIO: &str = "1:1";

/// Request for generated images
#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub prompt: String,
    pub count: u32,
    pub mime_type: String,
    pub aspect_ratio: String,
}

impl ImageRequest {
    /// One square JPEG image for `prompt`
    pub fn single_square(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            count: 1,
            mime_type: "image/jpeg".to_string(),
            aspect_ratio: SQUARE_ASPECT_RATIO.to_string(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }
}

/// Raw image returned by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Gateway to the generative AI service
///
/// This port defines how the application layer reaches the remote service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Generate JSON text matching the request schema
    async fn generate_structured(
        &self,
        model: &Model,
        request: &StructuredRequest,
    ) -> Result<String, GatewayError>;

    /// Generate images for a prompt
    async fn generate_images(
        &self,
        model: &Model,
        request: &ImageRequest,
    ) -> Result<Vec<GeneratedImage>, GatewayError>;

    /// Open a chat session seeded with a system instruction and prior turns
    async fn create_chat_session(
        &self,
        model: &Model,
        system_instruction: &str,
        history: &[ChatTurn],
    ) -> Result<Box<dyn AiChatSession>, GatewayError>;
}

/// An active chat session.
///
/// The session holds the conversation history; callers only pass the new
/// message.
#[async_trait]
pub trait AiChatSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a message and get the assistant's reply
    async fn send(&self, message: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_square_request() {
        let request = ImageRequest::single_square("a carrot");
        assert_eq!(request.count, 1);
        assert_eq!(request.mime_type, "image/jpeg");
        assert_eq!(request.aspect_ratio.as_str(), "1:1");
    }

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::Api {
            status: 429,
            message: "quota".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 429 - quota");
    }
}
