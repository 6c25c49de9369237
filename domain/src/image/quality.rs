//! Image quality tier (Value Object)

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Quality tier for page illustrations.
///
/// Each tier maps directly to a descriptive modifier placed in the image
/// prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    #[default]
    Low,
    Medium,
    High,
}

impl ImageQuality {
    pub const ALL: [ImageQuality; 3] = [ImageQuality::Low, ImageQuality::Medium, ImageQuality::High];

    /// Descriptive modifier for this tier
    pub fn modifier(&self) -> &'static str {
        match self {
            ImageQuality::Low => "simple, charming",
            ImageQuality::Medium => "detailed and beautiful",
            ImageQuality::High => "vibrant, highly detailed, photorealistic",
        }
    }

    /// Full prompt sentence carrying the modifier
    pub fn prompt_sentence(&self) -> String {
        match self {
            ImageQuality::High => format!("A {} 4K illustration.", self.modifier()),
            _ => format!("A {} illustration.", self.modifier()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::Low => "low",
            ImageQuality::Medium => "medium",
            ImageQuality::High => "high",
        }
    }

    /// Resolution label shown next to the tier
    pub fn label(&self) -> &'static str {
        match self {
            ImageQuality::Low => "1K",
            ImageQuality::Medium => "2K",
            ImageQuality::High => "4K",
        }
    }
}

impl std::fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ImageQuality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "1k" => Ok(ImageQuality::Low),
            "medium" | "2k" => Ok(ImageQuality::Medium),
            "high" | "4k" => Ok(ImageQuality::High),
            _ => Err(DomainError::UnknownQuality(s.to_string())),
        }
    }
}
