//! Configuration file loading for storybook
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `STORYBOOK_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./storybook.toml` or `./.storybook.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/storybook/config.toml`
//! 5. Default values
//!
//! The API key itself never lives in a config file; see [`credential`].

pub mod credential;
mod error;
mod file_config;
mod loader;

pub use credential::resolve_api_key;
pub use error::ConfigError;
pub use file_config::{
    ConfigValidationError, FileChatConfig, FileConfig, FileGeminiConfig, FileImageConfig,
    FileLoggingConfig, FileOutputConfig, FileReplConfig, FileSpeechConfig,
};
pub use loader::ConfigLoader;
