//! REPL (Read-Eval-Print Loop) for reading the story

use crate::chat::{ChatExit, ChatRepl};
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::image_sink::ImageSink;
use crate::progress::with_spinner;
use crate::reader::command::ReaderCommand;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::sync::Arc;
use storybook_application::{Narrator, StorybookGateway};
use storybook_domain::{ImageQuality, StoryReader};
use tracing::warn;

/// What the reader loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Hand the terminal to the chat assistant
    Chat,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Back,
}

impl Direction {
    /// Shown when the reader is already at the end it is moving towards
    fn edge_notice(self) -> &'static str {
        match self {
            Direction::Forward => "That was the last page.",
            Direction::Back => "This is the first page.",
        }
    }
}

/// Interactive story reader
pub struct StoryRepl {
    gateway: Arc<StorybookGateway>,
    narrator: Arc<Narrator>,
    sink: ImageSink,
    config: ReplConfig,
    quality: ImageQuality,
    chat: ChatRepl,
}

impl StoryRepl {
    pub fn new(gateway: Arc<StorybookGateway>, narrator: Arc<Narrator>, config: ReplConfig) -> Self {
        let chat = ChatRepl::new(Arc::clone(&gateway)).with_progress(config.show_progress);
        Self {
            sink: ImageSink::new(config.image_dir.clone()),
            quality: config.quality,
            gateway,
            narrator,
            config,
            chat,
        }
    }

    /// Load the story, then run the reader loop until `/quit`
    pub async fn run(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        let story = with_spinner(
            "Writing a story...",
            self.config.show_progress,
            self.gateway.generate_story(),
        )
        .await;
        let mut reader = StoryReader::new(story);

        println!("{}", ConsoleFormatter::title(reader.story()));
        println!("Type /help for commands.");
        self.show_page(&reader).await;

        loop {
            let prompt = format!("[{}/{}]> ", reader.page_number(), reader.total_pages());
            match rl.readline(&prompt) {
                Ok(line) => {
                    let Some(command) = ReaderCommand::parse(&line) else {
                        continue;
                    };
                    let _ = rl.add_history_entry(line.trim());

                    match self.handle(command, &mut reader).await {
                        Flow::Continue => {}
                        Flow::Chat => {
                            if self.chat.run(&mut rl).await? == ChatExit::Quit {
                                break;
                            }
                            self.resume_reading(&reader);
                        }
                        Flow::Quit => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        self.narrator.stop();
        println!("The end. Sweet dreams!");

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle one command. Chat is left to the caller, which owns the editor.
    async fn handle(&mut self, command: ReaderCommand, reader: &mut StoryReader) -> Flow {
        match command {
            ReaderCommand::Next => self.turn_page(reader, Direction::Forward).await,
            ReaderCommand::Prev => self.turn_page(reader, Direction::Back).await,
            ReaderCommand::ShowQuality => println!("{}", ConsoleFormatter::quality(self.quality)),
            ReaderCommand::SetQuality(quality) => {
                if quality != self.quality {
                    self.quality = quality;
                    println!("{}", ConsoleFormatter::quality(quality));
                    self.illustrate(reader).await;
                } else {
                    println!("{}", ConsoleFormatter::quality(quality));
                }
            }
            ReaderCommand::Image => self.illustrate(reader).await,
            ReaderCommand::Read => self.read_aloud(reader).await,
            ReaderCommand::Chat => return Flow::Chat,
            ReaderCommand::Help => println!("{}", ConsoleFormatter::reader_help()),
            ReaderCommand::Quit => return Flow::Quit,
            ReaderCommand::Invalid(message) => {
                println!("{}", message);
                println!("Type /help for available commands");
            }
        }
        Flow::Continue
    }

    async fn turn_page(&self, reader: &mut StoryReader, direction: Direction) {
        let moved = match direction {
            Direction::Forward => reader.next(),
            Direction::Back => reader.prev(),
        };
        if moved {
            self.narrator.stop();
            self.show_page(reader).await;
        } else {
            println!("{}", direction.edge_notice());
        }
    }

    /// Back from chat on the same page and quality, so the picture stands.
    fn resume_reading(&self, reader: &StoryReader) {
        println!("{}", ConsoleFormatter::page(reader));
    }

    async fn show_page(&self, reader: &StoryReader) {
        println!("{}", ConsoleFormatter::page(reader));
        self.illustrate(reader).await;
    }

    async fn illustrate(&self, reader: &StoryReader) {
        if !self.config.images_enabled {
            return;
        }

        let image = with_spinner(
            "Drawing a picture...",
            self.config.show_progress,
            self.gateway.generate_image(reader.current_text(), self.quality),
        )
        .await;

        match self.sink.write(reader.page_number(), &image) {
            Ok(output) => println!(
                "{}",
                ConsoleFormatter::illustration(reader.page_number(), &output)
            ),
            Err(e) => warn!("Could not save illustration: {}", e),
        }
    }

    async fn read_aloud(&self, reader: &StoryReader) {
        if !self.narrator.is_available() {
            println!("Reading aloud is not available (no speech synthesizer found).");
            return;
        }

        match self.narrator.toggle(reader.current_text()).await {
            Ok(state) => println!("{}", ConsoleFormatter::narration(state)),
            Err(e) => println!("Could not read aloud: {}", e),
        }
    }
}
