//! Application-level configuration.
//!
//! - [`GatewayConfig`]: models and fixed instructions used by the use cases

pub mod gateway_config;

pub use gateway_config::GatewayConfig;
