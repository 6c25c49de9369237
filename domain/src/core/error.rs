//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Story has no pages")]
    EmptyStory,

    #[error("Malformed story payload: {0}")]
    MalformedStory(String),

    #[error("Unknown image quality: {0}")]
    UnknownQuality(String),
}

impl DomainError {
    /// Whether this error came from decoding a story payload
    pub fn is_story_error(&self) -> bool {
        matches!(self, DomainError::EmptyStory | DomainError::MalformedStory(_))
    }
}
