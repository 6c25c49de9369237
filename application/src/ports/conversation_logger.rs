//! Port for the storybook event log.
//!
//! Every remote exchange the gateway makes ends in exactly one event: the
//! story or illustration that came back, the chat reply, or the fallback that
//! replaced it. Events carry the model that was asked, so a log shows which
//! backend produced which fallback.
//!
//! Diagnostics stay on `tracing`; this port is the machine-readable record.

use serde_json::Value;
use storybook_domain::Model;

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    StoryGenerated,
    /// The fixed Barnaby story was served instead
    StoryFallback,
    ImageGenerated,
    /// A placeholder picture was served instead
    ImageFallback,
    ChatSessionCreated,
    ChatReply,
    /// The apology was served and the session discarded
    ChatFailed,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::StoryGenerated => "story_generated",
            EventKind::StoryFallback => "story_fallback",
            EventKind::ImageGenerated => "image_generated",
            EventKind::ImageFallback => "image_fallback",
            EventKind::ChatSessionCreated => "chat_session_created",
            EventKind::ChatReply => "chat_reply",
            EventKind::ChatFailed => "chat_failed",
        }
    }

    /// Whether the user was shown a substitute instead of a generated result
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            EventKind::StoryFallback | EventKind::ImageFallback | EventKind::ChatFailed
        )
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the event log
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    pub kind: EventKind,
    /// Model the request went to
    pub model: Model,
    /// Kind-specific details (prompt, reply, error text...)
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(kind: EventKind, model: &Model, payload: Value) -> Self {
        Self {
            kind,
            model: model.clone(),
            payload,
        }
    }
}

/// Sink for storybook events.
///
/// `log` is synchronous and infallible; implementations swallow their own
/// write errors so a broken log never breaks reading.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Logger used when `logging.conversation_log` is unset.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
