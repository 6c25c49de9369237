//! Local speech synthesis
//!
//! Provides [`CommandSpeech`], which implements the
//! [`SpeechPort`](storybook_application::SpeechPort) by running a
//! text-to-speech command such as `espeak-ng` or `say`.

mod command;

pub use command::{CommandSpeech, KNOWN_SYNTHESIZERS};
