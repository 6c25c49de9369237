//! Speech synthesis port
//!
//! Read-aloud is delegated to a local text-to-speech collaborator. Each
//! utterance reports its lifecycle through a [`SpeechHandle`].

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors from the speech collaborator
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("No speech synthesizer available")]
    Unavailable,

    #[error("Failed to start speech: {0}")]
    StartFailed(String),
}

/// Lifecycle event of one utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Started,
    Finished,
    Cancelled,
    Failed(String),
}

impl SpeechEvent {
    /// Whether no further events follow this one
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SpeechEvent::Started)
    }
}

/// Receiver for the events of one utterance.
pub struct SpeechHandle {
    pub receiver: mpsc::Receiver<SpeechEvent>,
}

impl SpeechHandle {
    pub fn new(receiver: mpsc::Receiver<SpeechEvent>) -> Self {
        Self { receiver }
    }

    pub async fn recv(&mut self) -> Option<SpeechEvent> {
        self.receiver.recv().await
    }

    /// Wait for the terminal event.
    ///
    /// A channel closed without one counts as `Finished`.
    pub async fn wait(mut self) -> SpeechEvent {
        while let Some(event) = self.receiver.recv().await {
            if event.is_terminal() {
                return event;
            }
        }
        SpeechEvent::Finished
    }
}

/// Local text-to-speech collaborator
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Whether speech can be produced at all
    fn is_available(&self) -> bool;

    /// Start speaking `text`
    async fn speak(&self, text: &str) -> Result<SpeechHandle, SpeechError>;

    /// Stop whatever is being spoken. No-op when silent.
    fn cancel(&self);
}

/// Speech port used when no synthesizer exists.
pub struct NoSpeech;

#[async_trait]
impl SpeechPort for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }

    async fn speak(&self, _text: &str) -> Result<SpeechHandle, SpeechError> {
        Err(SpeechError::Unavailable)
    }

    fn cancel(&self) {}
}
