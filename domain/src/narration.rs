//! Read-aloud state

use serde::{Deserialize, Serialize};

/// Whether a page is currently being read aloud
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NarrationState {
    #[default]
    Idle,
    Speaking,
}

impl NarrationState {
    pub fn is_speaking(&self) -> bool {
        matches!(self, NarrationState::Speaking)
    }
}
