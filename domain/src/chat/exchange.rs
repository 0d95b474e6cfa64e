//! Wire shapes of the chat endpoint and the tagged result of one exchange.
//!
//! ```text
//! POST /api/chat  {"message": "..."}
//!   2xx     -> {"answer": "..."}   (extra fields ignored)
//!   non-2xx -> {"detail": "..."}   (optional, body may not even be JSON)
//! ```

use super::error::ChatError;
use super::messages::Messages;
use crate::core::question::Question;
use serde::Serialize;
use serde_json::Value;

/// Request body sent to the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

impl From<&Question> for ChatRequest {
    fn from(question: &Question) -> Self {
        Self {
            message: question.content().to_string(),
        }
    }
}

/// Body of a successful response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerResponse {
    pub answer: Option<String>,
}

impl AnswerResponse {
    /// Parse a success body. Invalid JSON is an error; valid JSON that is
    /// not an object, or has no string `answer`, carries no answer.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self {
            answer: string_field(&value, "answer"),
        })
    }
}

/// Body of a failure response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: Option<String>,
}

impl ErrorResponse {
    /// Parse a failure body, falling back to an empty record when it is not
    /// a JSON object with a string `detail`.
    pub fn parse_lenient(body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| string_field(&value, "detail"));
        Self { detail }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.as_object()?.get(key)?.as_str().map(str::to_string)
}

/// Outcome of one request/response exchange, already validated at the
/// network boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatExchange {
    /// The endpoint answered with a 2xx status
    Answered(AnswerResponse),
    /// The endpoint answered with a non-2xx status
    Rejected { status: u16, body: ErrorResponse },
}

impl ChatExchange {
    /// Turn the exchange into the text to display, or the error to surface.
    pub fn into_answer(self, messages: &Messages) -> Result<String, ChatError> {
        match self {
            ChatExchange::Answered(body) => Ok(body
                .answer
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| messages.no_answer.clone())),
            // `detail` is shown verbatim; only a missing or empty one falls back
            ChatExchange::Rejected { status, body } => match body.detail.filter(|d| !d.is_empty()) {
                Some(detail) => Err(ChatError::Application { status, detail }),
                None => Err(ChatError::Protocol { status }),
            },
        }
    }
}
