//! Gemini chat session.
//!
//! Provides [`GeminiChatSession`] which implements [`AiChatSession`].
//! `generateContent` is stateless, so the session keeps the conversation
//! history locally and sends it with every request.

use crate::gemini::client::GeminiClient;
use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::{Content, GenerateContentRequest};
use async_trait::async_trait;
use std::sync::Arc;
use storybook_application::{AiChatSession, GatewayError};
use storybook_domain::{ChatTurn, Model};
use tokio::sync::Mutex;
use tracing::debug;

pub struct GeminiChatSession {
    client: Arc<GeminiClient>,
    model: Model,
    system_instruction: Content,
    /// Turns that were sent and answered successfully
    history: Mutex<Vec<Content>>,
}

impl GeminiChatSession {
    pub fn new(
        client: Arc<GeminiClient>,
        model: Model,
        system_instruction: &str,
        history: &[ChatTurn],
    ) -> Self {
        Self {
            client,
            model,
            system_instruction: Content::system(system_instruction),
            history: Mutex::new(history.iter().map(Content::from).collect()),
        }
    }

    /// Number of messages held in the session history.
    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }

    /// Send a message; the exchange joins the history only on success.
    pub async fn ask(&self, message: &str) -> Result<String> {
        let mut history = self.history.lock().await;

        let user = Content::user(message);
        let mut contents = history.clone();
        contents.push(user.clone());

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(self.system_instruction.clone()),
            generation_config: None,
        };

        debug!(
            model = %self.model,
            messages = request.contents.len(),
            "Sending chat turn"
        );

        let response = self.client.generate_content(&self.model, &request).await?;
        if let Some(reason) = response.block_reason() {
            return Err(GeminiError::Blocked(reason));
        }
        let reply = response.text().ok_or(GeminiError::EmptyResponse)?;

        history.push(user);
        history.push(Content::model(reply.clone()));
        Ok(reply)
    }
}

#[async_trait]
impl AiChatSession for GeminiChatSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, message: &str) -> std::result::Result<String, GatewayError> {
        self.ask(message).await.map_err(GatewayError::from)
    }
}
