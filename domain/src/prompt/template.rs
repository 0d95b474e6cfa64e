//! Prompt templates offered next to the input field

use serde::{Deserialize, Serialize};

/// A canned question the user can drop into the input with one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Short text shown on the trigger
    pub label: String,
    /// Text written into the input; a missing payload writes nothing
    #[serde(default)]
    pub prompt: String,
}

impl PromptTemplate {
    pub fn new(label: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            prompt: prompt.into(),
        }
    }

    /// Templates shipped with the assistant
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "Senyal",
                "Quin és l'AP amb menys intensitat de camp?",
            ),
            Self::new(
                "Salut",
                "Quins punts d'accés tenen pitjor salut mitjana avui?",
            ),
            Self::new(
                "Clients",
                "A quina hora hi ha més clients connectats al campus?",
            ),
        ]
    }
}
