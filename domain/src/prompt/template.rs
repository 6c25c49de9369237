//! Prompt templates

use crate::image::quality::ImageQuality;

/// Style preamble placed before every illustration prompt
pub const ILLUSTRATION_STYLE: &str =
    "Create a whimsical, colorful, child-friendly storybook illustration.";

/// Templates for the three kinds of remote requests
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for generating a new story
    pub fn story() -> &'static str {
        "Generate a short, 5-page story for a 5-year-old child about a curious bunny named Barnaby who discovers a magical, glowing carrot. Each page should be a short paragraph. The title should be imaginative."
    }

    /// Prompt for illustrating one page at the given quality
    pub fn illustration(scene: &str, quality: ImageQuality) -> String {
        format!(
            "{} {} The scene is: {}",
            ILLUSTRATION_STYLE,
            quality.prompt_sentence(),
            scene
        )
    }

    /// System instruction for the chat assistant
    pub fn chat_system() -> &'static str {
        "You are a friendly, cheerful, and helpful chatbot for a 5-year-old child. Keep your answers very short, simple, and encouraging. Use simple words."
    }
}
