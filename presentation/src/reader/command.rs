//! Reader command parsing

use storybook_domain::ImageQuality;

/// A line typed at the reader prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderCommand {
    Next,
    Prev,
    /// `/quality` without an argument
    ShowQuality,
    SetQuality(ImageQuality),
    Image,
    Read,
    Chat,
    Help,
    Quit,
    Invalid(String),
}

impl ReaderCommand {
    /// Parse one input line; blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        Some(match name {
            "n" | "next" | "/next" => ReaderCommand::Next,
            "p" | "prev" | "/prev" => ReaderCommand::Prev,
            "/quality" if arg.is_empty() => ReaderCommand::ShowQuality,
            "/quality" => match arg.parse() {
                Ok(quality) => ReaderCommand::SetQuality(quality),
                Err(e) => ReaderCommand::Invalid(format!("{}", e)),
            },
            "/image" | "/i" => ReaderCommand::Image,
            "/read" | "/r" => ReaderCommand::Read,
            "/chat" | "/c" => ReaderCommand::Chat,
            "/help" | "/h" | "/?" => ReaderCommand::Help,
            "/quit" | "/exit" => ReaderCommand::Quit,
            _ => ReaderCommand::Invalid(format!("Unknown command: {}", line)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation() {
        assert_eq!(ReaderCommand::parse("n"), Some(ReaderCommand::Next));
        assert_eq!(ReaderCommand::parse(" next "), Some(ReaderCommand::Next));
        assert_eq!(ReaderCommand::parse("p"), Some(ReaderCommand::Prev));
        assert_eq!(ReaderCommand::parse("   "), None);
    }

    #[test]
    fn test_quality() {
        assert_eq!(
            ReaderCommand::parse("/quality high"),
            Some(ReaderCommand::SetQuality(ImageQuality::High))
        );
        assert_eq!(
            ReaderCommand::parse("/quality 2K"),
            Some(ReaderCommand::SetQuality(ImageQuality::Medium))
        );
        assert_eq!(
            ReaderCommand::parse("/quality"),
            Some(ReaderCommand::ShowQuality)
        );
        assert!(matches!(
            ReaderCommand::parse("/quality ultra"),
            Some(ReaderCommand::Invalid(_))
        ));
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(ReaderCommand::parse("/image"), Some(ReaderCommand::Image));
        assert_eq!(ReaderCommand::parse("/read"), Some(ReaderCommand::Read));
        assert_eq!(ReaderCommand::parse("/chat"), Some(ReaderCommand::Chat));
        assert_eq!(ReaderCommand::parse("/quit"), Some(ReaderCommand::Quit));
        assert!(matches!(
            ReaderCommand::parse("jump"),
            Some(ReaderCommand::Invalid(_))
        ));
    }
}
