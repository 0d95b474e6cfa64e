//! Application layer for wifi-chat
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatConfig;
pub use ports::{
    chat_gateway::{ChatGateway, GatewayError},
    chat_view::ChatView,
    frame_host::{FrameHost, NoFrameHost},
};
pub use use_cases::{
    fill_template::{PromptTemplateFiller, TemplateError},
    load_frames::LazyFrameLoader,
    submit_question::SubmitQuestionUseCase,
};
