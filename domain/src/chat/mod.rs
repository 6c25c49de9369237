//! Chat domain.
//!
//! - [`entities::ChatTurn`]: one message in the assistant conversation
//! - [`entities::Transcript`]: append-only list of turns

pub mod entities;

/// First assistant turn shown when a chat opens
pub const CHAT_GREETING: &str =
    "Hi there! Ask me a question about the story or anything you want!";

/// Reply substituted when the assistant cannot answer
pub const CHAT_APOLOGY: &str = "Oops! I got a little confused. Can you ask me something else?";
