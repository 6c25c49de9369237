//! Read-aloud narration.
//!
//! [`Narrator::toggle`] starts reading a page, or stops the reading in
//! progress. State follows the events of the current utterance only; events
//! from an utterance that was already replaced are ignored.

use crate::ports::speech::{SpeechError, SpeechEvent, SpeechHandle, SpeechPort};
use std::sync::{Arc, Mutex, MutexGuard};
use storybook_domain::NarrationState;
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct Utterance {
    generation: u64,
    state: NarrationState,
}

/// Drives the speech collaborator for read-aloud.
pub struct Narrator {
    speech: Arc<dyn SpeechPort>,
    current: Arc<Mutex<Utterance>>,
}

impl Narrator {
    pub fn new(speech: Arc<dyn SpeechPort>) -> Self {
        Self {
            speech,
            current: Arc::new(Mutex::new(Utterance::default())),
        }
    }

    pub fn is_available(&self) -> bool {
        self.speech.is_available()
    }

    pub fn state(&self) -> NarrationState {
        lock(&self.current).state
    }

    /// Stop reading if speaking, otherwise start reading `text`.
    pub async fn toggle(&self, text: &str) -> Result<NarrationState, SpeechError> {
        if self.state().is_speaking() {
            self.stop();
            return Ok(NarrationState::Idle);
        }

        // Anything the synthesizer is still saying gets cut off first
        self.speech.cancel();
        let handle = self.speech.speak(text).await?;

        let generation = {
            let mut current = lock(&self.current);
            current.generation += 1;
            current.state = NarrationState::Speaking;
            current.generation
        };
        debug!("Narration {} started", generation);

        tokio::spawn(follow(handle, generation, Arc::clone(&self.current)));
        Ok(NarrationState::Speaking)
    }

    /// Stop reading.
    pub fn stop(&self) {
        self.speech.cancel();
        let mut current = lock(&self.current);
        current.generation += 1;
        current.state = NarrationState::Idle;
    }
}

async fn follow(mut handle: SpeechHandle, generation: u64, current: Arc<Mutex<Utterance>>) {
    while let Some(event) = handle.recv().await {
        if let SpeechEvent::Failed(reason) = &event {
            warn!("Narration {} failed: {}", generation, reason);
        }
        let state = if event.is_terminal() {
            NarrationState::Idle
        } else {
            NarrationState::Speaking
        };
        let mut utterance = lock(&current);
        if utterance.generation != generation {
            return;
        }
        utterance.state = state;
        if event.is_terminal() {
            return;
        }
    }

    let mut utterance = lock(&current);
    if utterance.generation == generation {
        utterance.state = NarrationState::Idle;
    }
}

fn lock(current: &Mutex<Utterance>) -> MutexGuard<'_, Utterance> {
    current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
