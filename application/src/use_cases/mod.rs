//! Use cases (application services)

pub mod chat_relay;
pub mod generate_image;
pub mod generate_story;
pub mod narrate;

#[cfg(test)]
pub(crate) mod test_support;
