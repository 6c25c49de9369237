//! Terminal output: formatting and illustration files

pub mod console;
pub mod image_sink;
