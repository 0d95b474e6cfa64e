//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod chat;

pub use chat::FileChatConfig;

use crate::http::parse_endpoint;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use wifichat_application::ChatConfig;
use wifichat_domain::{FrameBinding, Messages, PromptTemplate};

/// Problems found while validating a loaded configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("chat.endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("chat.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("templates[{0}].label must not be empty")]
    EmptyTemplateLabel(usize),

    #[error("frames[{0}] needs both a dialog and a frame id")]
    UnbindableFrame(usize),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Endpoint and request settings
    pub chat: FileChatConfig,
    /// Localized UI strings
    pub messages: Messages,
    /// Prompt templates (`[[templates]]`)
    pub templates: Vec<PromptTemplate>,
    /// Lazily loaded dialog frames (`[[frames]]`)
    pub frames: Vec<FrameBinding>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            chat: FileChatConfig::default(),
            messages: Messages::default(),
            templates: PromptTemplate::defaults(),
            frames: FrameBinding::defaults(),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if let Err(e) = parse_endpoint(&self.chat.endpoint) {
            issues.push(ConfigValidationError::InvalidEndpoint(e.to_string()));
        }

        if self.chat.timeout_secs == Some(0) {
            issues.push(ConfigValidationError::ZeroTimeout);
        }

        for (i, template) in self.templates.iter().enumerate() {
            if template.label.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyTemplateLabel(i));
            }
        }

        for (i, frame) in self.frames.iter().enumerate() {
            if !frame.is_bindable() {
                issues.push(ConfigValidationError::UnbindableFrame(i));
            }
        }

        issues
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.chat.timeout_secs.map(Duration::from_secs)
    }

    /// Convert to the submit use case's configuration
    pub fn to_chat_config(&self) -> ChatConfig {
        ChatConfig::default()
            .with_messages(self.messages.clone())
            .with_timeout(self.timeout())
    }
}
