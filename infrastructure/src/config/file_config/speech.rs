//! Read-aloud configuration from TOML (`[speech]` section)

use serde::{Deserialize, Serialize};

/// Raw speech configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSpeechConfig {
    pub enabled: bool,
    /// Synthesizer command; detected from PATH when unset
    pub command: Option<String>,
    /// Extra arguments placed before the text
    pub args: Vec<String>,
}

impl Default for FileSpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            args: Vec::new(),
        }
    }
}
