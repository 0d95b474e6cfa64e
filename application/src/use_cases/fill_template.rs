//! Prompt template filler.
//!
//! Each template acts as its own trigger: activating it writes its prompt
//! into the input and focuses the input. No request is made.

use crate::ports::chat_view::ChatView;
use thiserror::Error;
use tracing::debug;
use wifichat_domain::PromptTemplate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("No template at position {index} ({available} available)")]
    OutOfRange { index: usize, available: usize },

    #[error("No template labelled '{0}'")]
    UnknownLabel(String),
}

/// The set of prompt templates offered next to the input.
#[derive(Debug, Clone, Default)]
pub struct PromptTemplateFiller {
    templates: Vec<PromptTemplate>,
}

impl PromptTemplateFiller {
    pub fn new(templates: Vec<PromptTemplate>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &[PromptTemplate] {
        &self.templates
    }

    /// Activate the template at `index` (zero-based).
    pub fn fill(&self, index: usize, view: &dyn ChatView) -> Result<&PromptTemplate, TemplateError> {
        let template = self
            .templates
            .get(index)
            .ok_or(TemplateError::OutOfRange {
                index,
                available: self.templates.len(),
            })?;
        Self::apply(template, view);
        Ok(template)
    }

    /// Activate the template whose label matches, ignoring case.
    pub fn fill_by_label(
        &self,
        label: &str,
        view: &dyn ChatView,
    ) -> Result<&PromptTemplate, TemplateError> {
        let template = self
            .templates
            .iter()
            .find(|t| t.label.eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| TemplateError::UnknownLabel(label.to_string()))?;
        Self::apply(template, view);
        Ok(template)
    }

    fn apply(template: &PromptTemplate, view: &dyn ChatView) {
        debug!("Filling input from template '{}'", template.label);
        view.set_input(&template.prompt);
        view.focus_input();
    }
}
