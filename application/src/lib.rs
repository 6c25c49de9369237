//! Application layer for storybook
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod gateway;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GatewayConfig;
pub use gateway::StorybookGateway;
pub use ports::{
    ai_gateway::{
        AiChatSession, AiGateway, GatewayError, GeneratedImage, ImageRequest, StructuredRequest,
    },
    conversation_logger::{ConversationEvent, ConversationLogger, EventKind, NoConversationLogger},
    speech::{NoSpeech, SpeechError, SpeechEvent, SpeechHandle, SpeechPort},
};
pub use use_cases::chat_relay::{ChatRelay, ChatState};
pub use use_cases::generate_image::{GenerateImageError, GenerateImageUseCase};
pub use use_cases::generate_story::{GenerateStoryError, GenerateStoryUseCase};
pub use use_cases::narrate::Narrator;
