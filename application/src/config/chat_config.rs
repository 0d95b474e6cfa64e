//! Chat parameters — submit use case behavior.
//!
//! [`ChatConfig`] groups what the submit flow needs beyond its ports: the
//! strings it shows and the optional request timeout.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use wifichat_domain::Messages;

/// Behavior of [`SubmitQuestionUseCase`](crate::use_cases::submit_question::SubmitQuestionUseCase).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Localized strings written to the view.
    pub messages: Messages,
    /// Upper bound for one request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ChatConfig {
    // ==================== Builder Methods ====================

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
