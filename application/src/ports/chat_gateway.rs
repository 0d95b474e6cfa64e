//! Chat gateway port
//!
//! Defines the network boundary of the chat flow. Adapters return an already
//! validated [`ChatExchange`]; anything that prevents one from being produced
//! is a [`GatewayError`].

use async_trait::async_trait;
use thiserror::Error;
use wifichat_domain::{ChatError, ChatExchange, ChatRequest};

/// Errors that can occur before a response can be interpreted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Connection refused, DNS failure, reset, ...
    #[error("{0}")]
    Transport(String),

    /// A 2xx response whose body is not the expected JSON
    #[error("{0}")]
    MalformedBody(String),

    #[error("request timed out")]
    Timeout,
}

impl From<GatewayError> for ChatError {
    fn from(err: GatewayError) -> Self {
        ChatError::transport(err.to_string())
    }
}

/// Gateway for the chat endpoint
///
/// One call is one POST. Implementations must not retry.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send a question and return the validated exchange
    async fn send(&self, request: &ChatRequest) -> Result<ChatExchange, GatewayError>;
}
