//! Story entity and its wire shape

use super::fallback::{FALLBACK_PAGES, FALLBACK_TITLE};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A generated story (Entity)
///
/// Immutable once produced. A new story replaces the old one in full.
/// Deserializing goes through [`Story::new`], so a story always has a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoryPayload")]
pub struct Story {
    title: String,
    pages: Vec<String>,
}

/// Unchecked wire shape of a story
#[derive(Deserialize)]
struct StoryPayload {
    title: String,
    pages: Vec<String>,
}

impl TryFrom<StoryPayload> for Story {
    type Error = DomainError;

    fn try_from(payload: StoryPayload) -> Result<Self, Self::Error> {
        Story::new(payload.title, payload.pages)
    }
}

impl Story {
    /// Create a story, rejecting one without pages.
    pub fn new(title: impl Into<String>, pages: Vec<String>) -> Result<Self, DomainError> {
        if pages.is_empty() {
            return Err(DomainError::EmptyStory);
        }
        Ok(Self {
            title: title.into(),
            pages,
        })
    }

    /// The fixed story used when generation fails.
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            pages: FALLBACK_PAGES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Parse the JSON text returned by a structured-output request.
    ///
    /// Surrounding whitespace is ignored. Both `title` and `pages` must be
    /// present with the declared types, and `pages` must not be empty.
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let payload: StoryPayload = serde_json::from_str(raw.trim())
            .map_err(|e| DomainError::MalformedStory(e.to_string()))?;
        Self::try_from(payload)
    }

    /// Response schema declared to the text model.
    ///
    /// Uses the OpenAPI subset understood by Gemini structured output.
    pub fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "pages": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                }
            },
            "required": ["title", "pages"],
            "propertyOrdering": ["title", "pages"]
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
