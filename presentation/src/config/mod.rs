//! Presentation-level configuration
//!
//! Settings for the story reader and chat REPLs, resolved by the binary
//! from file configuration and CLI flags.

use std::path::PathBuf;
use storybook_domain::ImageQuality;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show a spinner while waiting on the AI service
    pub show_progress: bool,
    /// Path to history file; defaults to the user data directory
    pub history_file: Option<PathBuf>,
    /// Request an illustration whenever the page or quality changes
    pub images_enabled: bool,
    /// Directory receiving decoded illustrations
    pub image_dir: Option<PathBuf>,
    /// Starting quality tier
    pub quality: ImageQuality,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            images_enabled: true,
            image_dir: None,
            quality: ImageQuality::default(),
        }
    }
}

impl ReplConfig {
    /// History file location, falling back to `<data_dir>/storybook/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("storybook").join("history.txt")))
    }
}
