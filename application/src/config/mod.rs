//! Application-level configuration.
//!
//! - [`ChatConfig`] — strings and timeout used by the submit use case

pub mod chat_config;

pub use chat_config::ChatConfig;
