//! Story domain.
//!
//! - [`entities::Story`]: a titled, ordered sequence of pages
//! - [`fallback`]: the story shown when generation fails
//! - [`reader::StoryReader`]: page cursor used by readers

pub mod entities;
pub mod fallback;
pub mod reader;
