//! Gemini REST adapter
//!
//! Implements [`AiGateway`](storybook_application::AiGateway) over the
//! Generative Language REST API: `generateContent` for text and chat,
//! `predict` for Imagen illustrations.

pub mod client;
pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;

pub use client::{DEFAULT_BASE_URL, GeminiClient, GeminiClientConfig};
pub use error::GeminiError;
pub use gateway::GeminiGateway;
pub use session::GeminiChatSession;
