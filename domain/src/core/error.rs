//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Illegal submit state transition: {from} -> {to}")]
    IllegalTransition {
        from: &'static str,
        to: &'static str,
    },
}

impl DomainError {
    /// Check if this error was caused by user input rather than program state
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::EmptyQuestion)
    }
}
