//! Localized UI strings for the chat flow

use serde::{Deserialize, Serialize};

/// Every piece of text the chat flow writes to the page on its own.
///
/// Defaults are Catalan, matching the assistant's audience. All fields can be
/// overridden from the `[messages]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown when the input is empty after trimming
    pub empty_question: String,
    /// Trigger label while a request is in flight
    pub busy_label: String,
    /// Interim output text while a request is in flight
    pub sending: String,
    /// Failure response without a usable `detail`
    pub no_response: String,
    /// Success response without a usable `answer`
    pub no_answer: String,
    /// Transport failure whose error carries no message
    pub request_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_question: "Introdueix una pregunta abans d'enviar-la.".to_string(),
            busy_label: "Enviant…".to_string(),
            sending: "Enviant la consulta al motor d'IA…".to_string(),
            no_response: "No s'ha pogut obtenir resposta de l'IA.".to_string(),
            no_answer: "La IA no ha retornat resposta.".to_string(),
            request_failed:
                "Hi ha hagut un problema en consultar l'IA. Torna-ho a intentar en uns segons."
                    .to_string(),
        }
    }
}
