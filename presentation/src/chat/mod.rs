//! Interactive chat module
//!
//! Provides a readline-based conversation with the story helper.

mod repl;

pub use repl::{ChatCommand, ChatExit, ChatRepl};
