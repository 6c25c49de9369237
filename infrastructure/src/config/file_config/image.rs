//! Illustration configuration from TOML (`[image]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use storybook_domain::ImageQuality;

/// Raw image configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImageConfig {
    /// Request an illustration for every page shown
    pub enabled: bool,
    /// Quality tier used until changed in the reader
    pub default_quality: ImageQuality,
    /// Directory receiving `page-<n>.jpg` files
    pub output_dir: Option<PathBuf>,
    /// Output format requested from the image model
    pub mime_type: String,
}

impl Default for FileImageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_quality: ImageQuality::default(),
            output_dir: None,
            mime_type: "image/jpeg".to_string(),
        }
    }
}
