//! HTTP adapter for the chat endpoint

pub mod gateway;

pub use gateway::{
    DEFAULT_ENDPOINT, HealthStatus, HttpChatGateway, HttpGatewayError, parse_endpoint,
};
