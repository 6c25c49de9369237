//! Interactive story reader
//!
//! Shows the story page by page, draws an illustration whenever the page or
//! quality changes, reads pages aloud and hands over to the chat assistant.

mod command;
mod repl;

pub use command::ReaderCommand;
pub use repl::StoryRepl;
