//! Infrastructure layer for storybook
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod speech;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileChatConfig, FileConfig,
    FileGeminiConfig, FileImageConfig, FileLoggingConfig, FileOutputConfig, FileReplConfig,
    FileSpeechConfig, resolve_api_key,
};
pub use gemini::{
    DEFAULT_BASE_URL, GeminiChatSession, GeminiClient, GeminiClientConfig, GeminiError,
    GeminiGateway,
};
pub use logging::JsonlConversationLogger;
pub use speech::CommandSpeech;
