//! Chat configuration from TOML (`[chat]` section)

use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Overrides the built-in child-friendly system instruction
    pub system_instruction: Option<String>,
}
