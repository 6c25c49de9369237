//! REPL (Read-Eval-Print Loop) for the chat assistant

use crate::ConsoleFormatter;
use crate::progress::with_spinner;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::sync::Arc;
use storybook_application::StorybookGateway;
use storybook_domain::{ChatTurn, Transcript};

/// How the chat loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatExit {
    /// Return to the story reader
    Back,
    /// Leave the program
    Quit,
}

/// Slash commands understood by the chat loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Reset,
    Back,
    Help,
    Quit,
    Unknown(String),
}

impl ChatCommand {
    /// Parse a `/command` line; plain text is not a command.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        Some(match line {
            "/reset" => ChatCommand::Reset,
            "/back" | "/story" => ChatCommand::Back,
            "/help" | "/h" | "/?" => ChatCommand::Help,
            "/quit" | "/exit" | "/q" => ChatCommand::Quit,
            other => ChatCommand::Unknown(other.to_string()),
        })
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    gateway: Arc<StorybookGateway>,
    transcript: Transcript,
    show_progress: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl with a greeting-seeded transcript
    pub fn new(gateway: Arc<StorybookGateway>) -> Self {
        Self {
            gateway,
            transcript: Transcript::with_greeting(),
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Send one user message and record the exchange.
    ///
    /// The gateway sees the transcript as it stood before this message, so
    /// a freshly created session is not seeded with the message twice.
    pub async fn exchange(&mut self, text: &str) -> String {
        let reply = with_spinner(
            "Thinking...",
            self.show_progress,
            self.gateway.send_message(self.transcript.turns(), text),
        )
        .await;

        self.transcript.push(ChatTurn::user(text));
        self.transcript.push(ChatTurn::assistant(reply.clone()));
        reply
    }

    /// Forget the conversation and close the session
    pub async fn reset(&mut self) {
        self.gateway.reset_chat().await;
        self.transcript = Transcript::with_greeting();
    }

    /// Run the chat loop on an existing editor until `/back` or `/quit`
    pub async fn run(&mut self, rl: &mut DefaultEditor) -> rustyline::Result<ChatExit> {
        self.print_welcome();

        loop {
            match rl.readline("you> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    match ChatCommand::parse(line) {
                        Some(ChatCommand::Back) => return Ok(ChatExit::Back),
                        Some(ChatCommand::Quit) => return Ok(ChatExit::Quit),
                        Some(ChatCommand::Reset) => {
                            self.reset().await;
                            println!("Starting over!");
                            self.print_last();
                        }
                        Some(ChatCommand::Help) => println!("{}", ConsoleFormatter::chat_help()),
                        Some(ChatCommand::Unknown(cmd)) => {
                            println!("Unknown command: {}", cmd);
                            println!("Type /help for available commands");
                        }
                        None => {
                            self.exchange(line).await;
                            self.print_last();
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(ChatExit::Quit),
                Err(err) => return Err(err),
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│             Storybook - Chat Time           │");
        println!("╰─────────────────────────────────────────────╯");
        println!("{}", ConsoleFormatter::chat_help());
        for turn in self.transcript.turns() {
            println!("{}", ConsoleFormatter::chat_turn(turn));
        }
        println!();
    }

    fn print_last(&self) {
        if let Some(turn) = self.transcript.last() {
            println!("{}", ConsoleFormatter::chat_turn(turn));
            println!();
        }
    }
}
