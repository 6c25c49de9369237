//! Text-to-speech via an external command.
//!
//! Each utterance is one child process receiving the page text as its last
//! argument. Starting a new utterance or calling `cancel` kills the running
//! one.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Mutex;
use storybook_application::{SpeechError, SpeechEvent, SpeechHandle, SpeechPort};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Synthesizers probed on `PATH`, in order of preference
pub const KNOWN_SYNTHESIZERS: [&str; 4] = ["espeak-ng", "espeak", "say", "spd-say"];

pub struct CommandSpeech {
    program: Option<PathBuf>,
    args: Vec<String>,
    /// Cancels the utterance currently playing, if any
    current: Mutex<Option<CancellationToken>>,
}

impl CommandSpeech {
    /// Use the first known synthesizer found on `PATH`.
    pub fn detect() -> Self {
        let program = KNOWN_SYNTHESIZERS
            .iter()
            .find_map(|name| which::which(name).ok());

        match &program {
            Some(path) => debug!("Using speech synthesizer {}", path.display()),
            None => debug!("No speech synthesizer found, read-aloud disabled"),
        }

        Self::from_program(program, Vec::new())
    }

    /// Use an explicitly configured command.
    pub fn with_command(command: &str, args: Vec<String>) -> Self {
        let program = match which::which(command) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Speech command '{}' not usable: {}", command, e);
                None
            }
        };
        Self::from_program(program, args)
    }

    fn from_program(program: Option<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program,
            args,
            current: Mutex::new(None),
        }
    }

    /// Replace the tracked utterance, cancelling the previous one.
    fn track(&self, token: CancellationToken) {
        let previous = match self.current.lock() {
            Ok(mut current) => current.replace(token),
            Err(poisoned) => poisoned.into_inner().replace(token),
        };
        if let Some(previous) = previous {
            previous.cancel();
        }
    }

    async fn follow(mut child: Child, token: CancellationToken) -> SpeechEvent {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                let _ = child.kill().await;
                SpeechEvent::Cancelled
            }
            status = child.wait() => match status {
                Ok(status) if status.success() => SpeechEvent::Finished,
                Ok(status) => SpeechEvent::Failed(format!("synthesizer exited with {}", status)),
                Err(e) => SpeechEvent::Failed(e.to_string()),
            }
        }
    }
}

#[async_trait]
impl SpeechPort for CommandSpeech {
    fn is_available(&self) -> bool {
        self.program.is_some()
    }

    async fn speak(&self, text: &str) -> Result<SpeechHandle, SpeechError> {
        let program = self.program.as_ref().ok_or(SpeechError::Unavailable)?;

        let child = Command::new(program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| SpeechError::StartFailed(e.to_string()))?;

        let token = CancellationToken::new();
        self.track(token.clone());

        let (tx, rx) = mpsc::channel(2);
        let _ = tx.try_send(SpeechEvent::Started);
        tokio::spawn(async move {
            let event = Self::follow(child, token).await;
            let _ = tx.send(event).await;
        });

        Ok(SpeechHandle::new(rx))
    }

    fn cancel(&self) {
        let current = match self.current.lock() {
            Ok(mut current) => current.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(token) = current {
            token.cancel();
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_successful_command_finishes() {
        let speech = CommandSpeech::with_command("true", Vec::new());
        assert!(speech.is_available());

        let mut handle = speech.speak("Once upon a time").await.unwrap();
        assert_eq!(handle.recv().await, Some(SpeechEvent::Started));
        assert_eq!(handle.wait().await, SpeechEvent::Finished);
    }

    #[tokio::test]
    async fn test_failing_command_reports_failure() {
        let speech = CommandSpeech::with_command("false", Vec::new());
        let handle = speech.speak("Once upon a time").await.unwrap();
        assert!(matches!(handle.wait().await, SpeechEvent::Failed(_)));
    }

    #[tokio::test]
    async fn test_cancel_kills_utterance() {
        // `sleep 30` stands in for a long page
        let speech = CommandSpeech::with_command("sleep", Vec::new());
        let handle = speech.speak("30").await.unwrap();

        speech.cancel();

        let event = tokio::time::timeout(Duration::from_secs(5), handle.wait())
            .await
            .unwrap();
        assert_eq!(event, SpeechEvent::Cancelled);
    }

    #[tokio::test]
    async fn test_new_utterance_cancels_previous() {
        let speech = CommandSpeech::with_command("sleep", Vec::new());
        let first = speech.speak("30").await.unwrap();
        let second = speech.speak("0").await.unwrap();

        assert_eq!(first.wait().await, SpeechEvent::Cancelled);
        assert_eq!(second.wait().await, SpeechEvent::Finished);
    }

    #[tokio::test]
    async fn test_unknown_command_is_unavailable() {
        let speech = CommandSpeech::with_command("no-such-synthesizer-xyz", Vec::new());
        assert!(!speech.is_available());
        assert!(matches!(
            speech.speak("hi").await,
            Err(SpeechError::Unavailable)
        ));
    }
}
