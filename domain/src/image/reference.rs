//! Displayable image reference

use serde::{Deserialize, Serialize};

/// Host serving placeholder images
pub const PLACEHOLDER_HOST: &str = "https://picsum.photos";

/// A displayable image: an inline payload or a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageReference {
    /// Base64 payload rendered as a `data:` URI
    Inline {
        mime_type: String,
        data_base64: String,
    },
    Url(String),
}

impl ImageReference {
    pub fn inline(mime_type: impl Into<String>, data_base64: impl Into<String>) -> Self {
        ImageReference::Inline {
            mime_type: mime_type.into(),
            data_base64: data_base64.into(),
        }
    }

    /// Placeholder image URL. `seed` makes repeated placeholders differ.
    pub fn placeholder(seed: u64) -> Self {
        ImageReference::Url(format!("{PLACEHOLDER_HOST}/512/512?random={seed}"))
    }

    /// Render as a URI suitable for display
    pub fn to_uri(&self) -> String {
        match self {
            ImageReference::Inline {
                mime_type,
                data_base64,
            } => format!("data:{mime_type};base64,{data_base64}"),
            ImageReference::Url(url) => url.clone(),
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, ImageReference::Inline { .. })
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageReference::Url(url) if url.starts_with(PLACEHOLDER_HOST))
    }
}

impl std::fmt::Display for ImageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_uri())
    }
}
