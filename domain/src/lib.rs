//! Domain layer for wifi-chat
//!
//! This crate contains the value objects and rules of the chat assistant.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: trimmed, non-empty user input
//! - **ChatExchange**: the validated result of one request/response cycle
//! - **ChatError**: validation, application, protocol and transport failures
//! - **SubmitState**: `Idle → Sending → {Success, Failed} → Idle`
//! - **DeferredFrame**: embedded content loaded on first display, at most once

pub mod chat;
pub mod core;
pub mod frame;
pub mod prompt;

// Re-export commonly used types
pub use chat::{
    error::ChatError,
    exchange::{AnswerResponse, ChatExchange, ChatRequest, ErrorResponse},
    messages::Messages,
    state::SubmitState,
};
pub use core::{error::DomainError, question::Question};
pub use frame::deferred::{DeferredFrame, FrameBinding};
pub use prompt::template::PromptTemplate;
