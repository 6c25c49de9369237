//! Configuration errors

use super::file_config::ConfigValidationError;
use thiserror::Error;

/// The only errors that stop the storybook from starting.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),

    #[error("No API key found; set one of: {}", variables.join(", "))]
    MissingCredential { variables: Vec<String> },
}
