//! Presentation layer for storybook
//!
//! This crate contains CLI definitions, console formatting, progress
//! spinners, and the interactive story reader and chat interfaces.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod reader;

// Re-export commonly used types
pub use chat::{ChatExit, ChatRepl};
pub use cli::commands::Cli;
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use output::image_sink::{ImageOutput, ImageSink};
pub use progress::{Spinner, with_spinner};
pub use reader::StoryRepl;
