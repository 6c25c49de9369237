//! Port definitions (interfaces for external adapters)

pub mod ai_gateway;
pub mod conversation_logger;
pub mod speech;
