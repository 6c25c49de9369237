//! Chat relay.
//!
//! Forwards chat turns to a single, lazily created [`AiChatSession`].
//!
//! State machine:
//!
//! | From | Event | To |
//! |------|-------|----|
//! | `NoSession` | first send | `SessionActive` (seeded with prior turns) |
//! | `SessionActive` | successful send | `SessionActive` (only the new message is sent) |
//! | any | failed create or send | `NoSession` |
//!
//! A failure never reaches the caller: the reply becomes [`CHAT_APOLOGY`]
//! and the next call rebuilds the session from the history it is given.

use crate::ports::ai_gateway::{AiChatSession, AiGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, EventKind, NoConversationLogger,
};
use serde_json::json;
use std::sync::Arc;
use storybook_domain::util::preview;
use storybook_domain::{CHAT_APOLOGY, ChatTurn, Model};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Whether the relay currently holds a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    NoSession,
    SessionActive,
}

/// Relays chat messages to the assistant through one owned session.
pub struct ChatRelay {
    gateway: Arc<dyn AiGateway>,
    model: Model,
    system_instruction: String,
    session: Mutex<Option<Box<dyn AiChatSession>>>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ChatRelay {
    pub fn new(
        gateway: Arc<dyn AiGateway>,
        model: Model,
        system_instruction: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            model,
            system_instruction: system_instruction.into(),
            session: Mutex::new(None),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn state(&self) -> ChatState {
        if self.session.lock().await.is_some() {
            ChatState::SessionActive
        } else {
            ChatState::NoSession
        }
    }

    /// Discard the current session; the next send starts a fresh one.
    pub async fn reset(&self) {
        if self.session.lock().await.take().is_some() {
            info!("Chat session discarded");
        }
    }

    /// Send `new_text` and return the assistant's reply.
    ///
    /// `prior_turns` only matters when no session exists yet: it becomes the
    /// seed history of the new session. Returns [`CHAT_APOLOGY`] on failure.
    pub async fn send_message(&self, prior_turns: &[ChatTurn], new_text: &str) -> String {
        let mut slot = self.session.lock().await;

        let session = match slot.take() {
            Some(session) => session,
            None => match self.open_session(prior_turns).await {
                Ok(session) => session,
                Err(e) => return self.apologize(new_text, &e),
            },
        };

        debug!("Sending chat message: {}", preview(new_text, 80));
        match session.send(new_text).await {
            Ok(reply) => {
                *slot = Some(session);
                self.conversation_logger.log(ConversationEvent::new(
                    EventKind::ChatReply,
                    &self.model,
                    json!({
                        "message": new_text,
                        "reply": reply,
                    }),
                ));
                reply
            }
            // The session is dropped here, leaving the slot empty
            Err(e) => self.apologize(new_text, &e),
        }
    }

    async fn open_session(
        &self,
        prior_turns: &[ChatTurn],
    ) -> Result<Box<dyn AiChatSession>, GatewayError> {
        info!(
            "Creating chat session with {} ({} prior turns)",
            self.model,
            prior_turns.len()
        );
        let session = self
            .gateway
            .create_chat_session(&self.model, &self.system_instruction, prior_turns)
            .await?;
        self.conversation_logger.log(ConversationEvent::new(
            EventKind::ChatSessionCreated,
            &self.model,
            json!({
                "history": prior_turns,
            }),
        ));
        Ok(session)
    }

    fn apologize(&self, new_text: &str, error: &GatewayError) -> String {
        warn!("Chat send failed, session reset: {}", error);
        self.conversation_logger.log(ConversationEvent::new(
            EventKind::ChatFailed,
            &self.model,
            json!({
                "message": new_text,
                "error": error.to_string(),
            }),
        ));
        CHAT_APOLOGY.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MemoryLogger, ScriptedGateway};
    use storybook_domain::{CHAT_GREETING, PromptTemplate};

    fn relay(gateway: ScriptedGateway) -> (ChatRelay, Arc<ScriptedGateway>) {
        let gateway = Arc::new(gateway);
        let relay = ChatRelay::new(
            gateway.clone(),
            Model::Gemini25Flash,
            PromptTemplate::chat_system(),
        );
        (relay, gateway)
    }

    #[tokio::test]
    async fn test_first_send_seeds_session_with_prior_turns() {
        let (relay, gateway) = relay(ScriptedGateway::new().with_reply(Ok("A bunny!".to_string())));
        let prior = vec![
            ChatTurn::assistant(CHAT_GREETING),
            ChatTurn::user("who is Barnaby?"),
            ChatTurn::assistant("A brave bunny."),
        ];

        let reply = relay.send_message(&prior, "what does he eat?").await;

        assert_eq!(reply, "A bunny!");
        assert_eq!(relay.state().await, ChatState::SessionActive);
        let recorded = gateway.recorded.lock().unwrap();
        assert_eq!(recorded.sessions.len(), 1);
        assert_eq!(recorded.sessions[0].0, PromptTemplate::chat_system());
        assert_eq!(recorded.sessions[0].1, prior);
        assert_eq!(recorded.sent, vec![(0, "what does he eat?".to_string())]);
    }

    #[tokio::test]
    async fn test_second_send_reuses_session() {
        let (relay, gateway) = relay(
            ScriptedGateway::new()
                .with_reply(Ok("first".to_string()))
                .with_reply(Ok("second".to_string())),
        );
        let prior = vec![ChatTurn::assistant(CHAT_GREETING)];

        relay.send_message(&prior, "hello").await;
        let longer = vec![
            ChatTurn::assistant(CHAT_GREETING),
            ChatTurn::user("hello"),
            ChatTurn::assistant("first"),
        ];
        let reply = relay.send_message(&longer, "again").await;

        assert_eq!(reply, "second");
        let recorded = gateway.recorded.lock().unwrap();
        assert_eq!(recorded.sessions.len(), 1);
        assert_eq!(
            recorded.sent,
            vec![(0, "hello".to_string()), (0, "again".to_string())]
        );
    }

    #[tokio::test]
    async fn test_failing_backend_returns_apology_and_no_session() {
        let (relay, _) = relay(ScriptedGateway::new());

        let reply = relay.send_message(&[], "hello").await;

        assert_eq!(
            reply,
            "Oops! I got a little confused. Can you ask me something else?"
        );
        assert_eq!(relay.state().await, ChatState::NoSession);
    }

    #[tokio::test]
    async fn test_failure_rebuilds_session_from_new_history() {
        let (relay, gateway) = relay(
            ScriptedGateway::new()
                .with_reply(Ok("hi!".to_string()))
                .with_reply(Err(GatewayError::Timeout))
                .with_reply(Ok("back again".to_string())),
        );

        relay.send_message(&[], "hello").await;
        let apology = relay.send_message(&[], "tell me more").await;
        assert_eq!(apology, CHAT_APOLOGY);
        assert_eq!(relay.state().await, ChatState::NoSession);

        let history = vec![
            ChatTurn::user("hello"),
            ChatTurn::assistant("hi!"),
            ChatTurn::user("tell me more"),
            ChatTurn::assistant(CHAT_APOLOGY),
        ];
        let reply = relay.send_message(&history, "are you there?").await;

        assert_eq!(reply, "back again");
        let recorded = gateway.recorded.lock().unwrap();
        assert_eq!(recorded.sessions.len(), 2);
        assert_eq!(recorded.sessions[1].1, history);
        assert_eq!(recorded.sent.last(), Some(&(1, "are you there?".to_string())));
    }

    #[tokio::test]
    async fn test_session_creation_failure_returns_apology() {
        let (relay, gateway) = relay(ScriptedGateway::new().failing_sessions());

        let reply = relay.send_message(&[], "hello").await;

        assert_eq!(reply, CHAT_APOLOGY);
        assert_eq!(relay.state().await, ChatState::NoSession);
        assert!(gateway.recorded.lock().unwrap().sent.is_empty());
    }

    #[tokio::test]
    async fn test_reset_discards_session() {
        let (relay, gateway) = relay(
            ScriptedGateway::new()
                .with_reply(Ok("one".to_string()))
                .with_reply(Ok("two".to_string())),
        );

        relay.send_message(&[], "a").await;
        relay.reset().await;
        assert_eq!(relay.state().await, ChatState::NoSession);
        relay.send_message(&[ChatTurn::user("a")], "b").await;

        assert_eq!(gateway.recorded.lock().unwrap().sessions.len(), 2);
    }

    #[tokio::test]
    async fn test_logs_turns() {
        let logger = Arc::new(MemoryLogger::default());
        let (relay, _) = relay(ScriptedGateway::new().with_reply(Ok("hey".to_string())));
        let relay = relay.with_conversation_logger(logger.clone());

        relay.send_message(&[], "hi").await;
        relay.send_message(&[], "still there?").await;

        assert_eq!(
            logger.event_types(),
            vec![
                EventKind::ChatSessionCreated,
                EventKind::ChatReply,
                EventKind::ChatFailed
            ]
        );
    }
}
