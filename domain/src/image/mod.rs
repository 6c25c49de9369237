//! Illustration domain.
//!
//! - [`quality::ImageQuality`]: quality tier selecting the prompt modifier
//! - [`reference::ImageReference`]: a displayable image (inline or URL)

pub mod quality;
pub mod reference;
