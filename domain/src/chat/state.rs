//! Submit state machine
//!
//! ```text
//! Idle ──begin──▶ Sending ──succeed──▶ Success ──reset──▶ Idle
//!                    └─────fail─────▶ Failed  ──reset──▶ Idle
//! ```

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Where a trigger is in its request cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Success,
    Failed,
}

impl SubmitState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitState::Idle => "Idle",
            SubmitState::Sending => "Sending",
            SubmitState::Success => "Success",
            SubmitState::Failed => "Failed",
        }
    }

    /// The trigger accepts activation only when idle
    pub fn accepts_trigger(&self) -> bool {
        matches!(self, SubmitState::Idle)
    }

    pub fn begin(self) -> Result<Self, DomainError> {
        self.transition(SubmitState::Sending)
    }

    pub fn succeed(self) -> Result<Self, DomainError> {
        self.transition(SubmitState::Success)
    }

    pub fn fail(self) -> Result<Self, DomainError> {
        self.transition(SubmitState::Failed)
    }

    /// Cleanup step; always lands on `Idle`
    pub fn reset(self) -> Self {
        SubmitState::Idle
    }

    fn transition(self, to: SubmitState) -> Result<Self, DomainError> {
        let allowed = matches!(
            (self, to),
            (SubmitState::Idle, SubmitState::Sending)
                | (SubmitState::Sending, SubmitState::Success)
                | (SubmitState::Sending, SubmitState::Failed)
        );
        if allowed {
            Ok(to)
        } else {
            Err(DomainError::IllegalTransition {
                from: self.as_str(),
                to: to.as_str(),
            })
        }
    }
}

impl std::fmt::Display for SubmitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
