//! Infrastructure layer for wifi-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileChatConfig, FileConfig};
pub use http::{DEFAULT_ENDPOINT, HealthStatus, HttpChatGateway, HttpGatewayError};
