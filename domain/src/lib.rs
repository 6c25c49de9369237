//! Domain layer for storybook
//!
//! This crate contains the entities and value objects of the storybook.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Story**: a titled, ordered list of pages, replaced in full whenever a
//!   new one arrives. [`Story::fallback`] is shown when generation fails.
//! - **Chat**: [`ChatTurn`]s between the child and the assistant, kept in an
//!   append-only [`Transcript`].
//! - **Illustration**: an [`ImageQuality`] tier picks the prompt modifier and
//!   the result is an [`ImageReference`].

pub mod chat;
pub mod core;
pub mod image;
pub mod narration;
pub mod prompt;
pub mod story;
pub mod util;

// Re-export commonly used types
pub use chat::{
    CHAT_APOLOGY, CHAT_GREETING,
    entities::{ChatTurn, Role, Transcript},
};
pub use core::{error::DomainError, model::Model};
pub use image::{
    quality::ImageQuality,
    reference::{ImageReference, PLACEHOLDER_HOST},
};
pub use narration::NarrationState;
pub use prompt::PromptTemplate;
pub use story::{entities::Story, reader::StoryReader};
