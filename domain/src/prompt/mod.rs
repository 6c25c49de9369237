//! Prompt templates for story, illustration and chat requests

pub mod template;

pub use template::PromptTemplate;
