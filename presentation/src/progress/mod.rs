//! Progress indication while waiting on the AI service

mod spinner;

pub use spinner::{Spinner, with_spinner};
