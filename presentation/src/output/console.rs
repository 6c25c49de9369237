//! Console output formatter for the story reader and chat

use crate::output::image_sink::ImageOutput;
use colored::Colorize;
use storybook_domain::{ChatTurn, ImageQuality, NarrationState, Role, Story, StoryReader};

/// Formats storybook content for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Story title banner
    pub fn title(story: &Story) -> String {
        Self::header(story.title())
    }

    /// Current page with its position in the story
    pub fn page(reader: &StoryReader) -> String {
        let position = format!("Page {} of {}", reader.page_number(), reader.total_pages());
        let mut output = Self::section_header(&position);
        output.push('\n');
        output.push_str(&Self::indent(reader.current_text(), "  "));
        output.push('\n');

        let mut hints = Vec::new();
        if !reader.is_first() {
            hints.push("p: previous");
        }
        if !reader.is_last() {
            hints.push("n: next");
        }
        if !hints.is_empty() {
            output.push_str(&format!("\n{}\n", hints.join("  ").dimmed()));
        }
        output
    }

    pub fn quality(quality: ImageQuality) -> String {
        format!(
            "{} {} ({})",
            "Illustration quality:".cyan().bold(),
            quality.label(),
            quality.modifier()
        )
    }

    /// Where the illustration for a page ended up
    pub fn illustration(page_number: usize, output: &ImageOutput) -> String {
        let label = format!("Illustration for page {}:", page_number);
        match output {
            ImageOutput::Saved(path) => format!("{} {}", label.green(), path.display()),
            ImageOutput::Inline { mime_type, bytes } => format!(
                "{} {} image, {} bytes (use --image-dir to save it)",
                label.green(),
                mime_type,
                bytes
            ),
            ImageOutput::Remote(url) => {
                format!("{} {} {}", label.yellow(), url, "(placeholder)".dimmed())
            }
        }
    }

    pub fn narration(state: NarrationState) -> String {
        match state {
            NarrationState::Speaking => {
                format!("{}", "Reading aloud... (/read again to stop)".cyan())
            }
            NarrationState::Idle => format!("{}", "Stopped reading.".dimmed()),
        }
    }

    /// One chat line
    pub fn chat_turn(turn: &ChatTurn) -> String {
        match turn.role {
            Role::Assistant => format!("{} {}", "Helper:".magenta().bold(), turn.text),
            Role::User => format!("{} {}", "You:".blue().bold(), turn.text),
        }
    }

    pub fn reader_help() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Commands:".cyan().bold()));
        output.push_str("  n, next              - Next page\n");
        output.push_str("  p, prev              - Previous page\n");
        output.push_str("  /quality [TIER]      - Show or set quality (low, medium, high)\n");
        output.push_str("  /image               - Draw this page again\n");
        output.push_str("  /read                - Read the page aloud (again to stop)\n");
        output.push_str("  /chat                - Ask the story helper a question\n");
        output.push_str("  /help                - Show this help\n");
        output.push_str("  /quit                - Exit\n");
        output
    }

    pub fn chat_help() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Chat commands:".cyan().bold()));
        output.push_str("  /reset   - Start the conversation over\n");
        output.push_str("  /back    - Back to the story\n");
        output.push_str("  /help    - Show this help\n");
        output.push_str("  /quit    - Exit\n");
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
