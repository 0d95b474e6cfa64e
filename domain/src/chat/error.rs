//! Error taxonomy of a single submission

use super::messages::Messages;
use thiserror::Error;

/// Why a submission did not produce an answer.
///
/// Every kind is terminal for the current submission; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Input was empty after trimming; no request was made
    #[error("Question is empty")]
    Validation,

    /// Non-2xx status with a `detail` message from the backend
    #[error("Backend rejected the question ({status}): {detail}")]
    Application { status: u16, detail: String },

    /// Non-2xx status without a usable `detail`
    #[error("Backend failed with status {status}")]
    Protocol { status: u16 },

    /// A previous submission is still in flight; the trigger is disabled
    #[error("A request is already in flight")]
    Busy,

    /// The request never produced an interpretable response
    #[error("Request failed: {}", .message.as_deref().unwrap_or("unknown error"))]
    Transport { message: Option<String> },
}

impl ChatError {
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        ChatError::Transport {
            message: (!message.trim().is_empty()).then_some(message),
        }
    }

    /// Text shown in the output area for this error
    pub fn display_text(&self, messages: &Messages) -> String {
        match self {
            ChatError::Validation => messages.empty_question.clone(),
            ChatError::Busy => messages.sending.clone(),
            ChatError::Application { detail, .. } => detail.clone(),
            ChatError::Protocol { .. } => messages.no_response.clone(),
            ChatError::Transport { message } => message
                .clone()
                .unwrap_or_else(|| messages.request_failed.clone()),
        }
    }

    /// Short name of the error kind, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ChatError::Validation => "validation",
            ChatError::Busy => "busy",
            ChatError::Application { .. } => "application",
            ChatError::Protocol { .. } => "protocol",
            ChatError::Transport { .. } => "transport",
        }
    }

    /// Whether a request reached the network before failing
    pub fn reached_network(&self) -> bool {
        !matches!(self, ChatError::Validation | ChatError::Busy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_per_kind() {
        let m = Messages::default();
        assert_eq!(ChatError::Validation.display_text(&m), m.empty_question);
        assert_eq!(
            ChatError::Application {
                status: 422,
                detail: "bad request".into()
            }
            .display_text(&m),
            "bad request"
        );
        assert_eq!(ChatError::Protocol { status: 500 }.display_text(&m), m.no_response);
        assert_eq!(
            ChatError::transport("connection refused").display_text(&m),
            "connection refused"
        );
        assert_eq!(ChatError::transport("").display_text(&m), m.request_failed);
    }

    #[test]
    fn test_reached_network() {
        assert!(!ChatError::Validation.reached_network());
        assert!(!ChatError::Busy.reached_network());
        assert!(ChatError::Protocol { status: 503 }.reached_network());
        assert!(ChatError::Transport { message: None }.reached_network());
    }
}
