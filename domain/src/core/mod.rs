//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: generative models the storybook talks to
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
