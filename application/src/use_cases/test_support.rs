//! Scripted gateway shared by use case tests.

use crate::ports::ai_gateway::{
    AiChatSession, AiGateway, GatewayError, GeneratedImage, ImageRequest, StructuredRequest,
};
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger, EventKind};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use storybook_domain::{ChatTurn, Model};

/// Everything the scripted gateway was asked to do
#[derive(Default)]
pub struct Recorded {
    pub structured: Vec<(Model, StructuredRequest)>,
    pub images: Vec<(Model, ImageRequest)>,
    /// (system instruction, seed history) per created session
    pub sessions: Vec<(String, Vec<ChatTurn>)>,
    /// (session index, message) per send
    pub sent: Vec<(usize, String)>,
}

/// Gateway that replays queued results and records every call.
///
/// An empty queue behaves like a failing backend.
#[derive(Default)]
pub struct ScriptedGateway {
    pub structured: Mutex<VecDeque<Result<String, GatewayError>>>,
    pub images: Mutex<VecDeque<Result<Vec<GeneratedImage>, GatewayError>>>,
    pub replies: Arc<Mutex<VecDeque<Result<String, GatewayError>>>>,
    pub fail_session_creation: bool,
    pub recorded: Arc<Mutex<Recorded>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_structured(self, result: Result<String, GatewayError>) -> Self {
        self.structured.lock().unwrap().push_back(result);
        self
    }

    pub fn with_images(self, result: Result<Vec<GeneratedImage>, GatewayError>) -> Self {
        self.images.lock().unwrap().push_back(result);
        self
    }

    pub fn with_reply(self, result: Result<String, GatewayError>) -> Self {
        self.replies.lock().unwrap().push_back(result);
        self
    }

    pub fn failing_sessions(mut self) -> Self {
        self.fail_session_creation = true;
        self
    }

    fn exhausted() -> GatewayError {
        GatewayError::ConnectionError("backend unavailable".to_string())
    }
}

#[async_trait]
impl AiGateway for ScriptedGateway {
    async fn generate_structured(
        &self,
        model: &Model,
        request: &StructuredRequest,
    ) -> Result<String, GatewayError> {
        self.recorded
            .lock()
            .unwrap()
            .structured
            .push((model.clone(), request.clone()));
        self.structured
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::exhausted()))
    }

    async fn generate_images(
        &self,
        model: &Model,
        request: &ImageRequest,
    ) -> Result<Vec<GeneratedImage>, GatewayError> {
        self.recorded
            .lock()
            .unwrap()
            .images
            .push((model.clone(), request.clone()));
        self.images
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::exhausted()))
    }

    async fn create_chat_session(
        &self,
        model: &Model,
        system_instruction: &str,
        history: &[ChatTurn],
    ) -> Result<Box<dyn AiChatSession>, GatewayError> {
        if self.fail_session_creation {
            return Err(GatewayError::SessionError("refused".to_string()));
        }
        let mut recorded = self.recorded.lock().unwrap();
        recorded
            .sessions
            .push((system_instruction.to_string(), history.to_vec()));
        Ok(Box::new(ScriptedSession {
            index: recorded.sessions.len() - 1,
            model: model.clone(),
            replies: Arc::clone(&self.replies),
            recorded: Arc::clone(&self.recorded),
        }))
    }
}

struct ScriptedSession {
    index: usize,
    model: Model,
    replies: Arc<Mutex<VecDeque<Result<String, GatewayError>>>>,
    recorded: Arc<Mutex<Recorded>>,
}

#[async_trait]
impl AiChatSession for ScriptedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, message: &str) -> Result<String, GatewayError> {
        self.recorded
            .lock()
            .unwrap()
            .sent
            .push((self.index, message.to_string()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ScriptedGateway::exhausted()))
    }
}

/// Logger that keeps events in memory
#[derive(Default)]
pub struct MemoryLogger {
    pub events: Mutex<Vec<ConversationEvent>>,
}

impl MemoryLogger {
    pub fn event_types(&self) -> Vec<EventKind> {
        self.events.lock().unwrap().iter().map(|e| e.kind).collect()
    }
}

impl ConversationLogger for MemoryLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push(event);
    }
}
