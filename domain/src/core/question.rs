//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question typed by the user (Value Object)
///
/// Always stored trimmed and never empty. Construction goes through
/// [`Question::parse`], which is the only validation the chat flow performs
/// before touching the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Trim `raw` and reject it if nothing is left
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// Try to create a new question, returning None if invalid
    pub fn try_new(raw: &str) -> Option<Self> {
        Self::parse(raw).ok()
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::parse(&s)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_is_trimmed() {
        let q = Question::parse("  Quin AP té menys senyal?\n").unwrap();
        assert_eq!(q.content(), "Quin AP té menys senyal?");
    }

    #[test]
    fn test_whitespace_only_is_rejected() {
        for raw in ["", " ", "\t", "\n  \r\n"] {
            assert_eq!(Question::parse(raw), Err(DomainError::EmptyQuestion));
        }
    }

    #[test]
    fn test_try_new() {
        assert!(Question::try_new("   ").is_none());
        assert!(Question::try_new("hola").is_some());
    }

    #[test]
    fn test_deserialize_validates() {
        let q: Question = serde_json::from_str(r#"" hola ""#).unwrap();
        assert_eq!(q.content(), "hola");
        assert!(serde_json::from_str::<Question>(r#""  ""#).is_err());
    }
}
