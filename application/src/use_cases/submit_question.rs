//! Submit Question use case.
//!
//! Turns one activation of the trigger into one POST against the chat
//! endpoint, with the view reflecting the in-flight, success and failure
//! states:
//!
//! 1. Trim the input; if empty, prompt, refocus, and stop (no request)
//! 2. Disable the trigger, show the busy label and the "sending" status
//! 3. POST `{"message": ...}` and interpret the exchange
//! 4. Show the answer or the error text
//! 5. Re-enable the trigger with its original label, on every exit path

use crate::config::ChatConfig;
use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use crate::ports::chat_view::ChatView;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};
use wifichat_domain::{ChatError, ChatRequest, Question, SubmitState};

/// Use case for submitting the question currently in the view.
pub struct SubmitQuestionUseCase {
    gateway: Arc<dyn ChatGateway>,
    config: ChatConfig,
    state: Mutex<SubmitState>,
}

impl SubmitQuestionUseCase {
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self {
            gateway,
            config: ChatConfig::default(),
            state: Mutex::new(SubmitState::Idle),
        }
    }

    pub fn with_config(mut self, config: ChatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Current state of the trigger's request cycle.
    pub fn state(&self) -> SubmitState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Submit the view's input and render the outcome into the view.
    ///
    /// Returns the text that was displayed on success. While a previous
    /// submission is in flight the trigger is disabled, so the call returns
    /// [`ChatError::Busy`] without touching the view.
    pub async fn submit(&self, view: &dyn ChatView) -> Result<String, ChatError> {
        if !self.state().accepts_trigger() {
            debug!("Trigger activated while {}; ignoring", self.state());
            return Err(ChatError::Busy);
        }

        let messages = &self.config.messages;
        let question = match Question::parse(&view.input()) {
            Ok(q) => q,
            Err(_) => {
                view.set_output(&messages.empty_question);
                view.focus_input();
                return Err(ChatError::Validation);
            }
        };

        self.transition(SubmitState::begin)?;
        let _trigger = TriggerGuard::engage(view, &self.state, &messages.busy_label);
        view.set_output(&messages.sending);

        match self.exchange(&question).await {
            Ok(answer) => {
                view.set_output(&answer);
                self.transition(SubmitState::succeed)?;
                Ok(answer)
            }
            Err(err) => {
                view.set_output(&err.display_text(messages));
                self.transition(SubmitState::fail)?;
                Err(err)
            }
        }
    }

    /// Send `raw` without a view and return the text that would be shown.
    pub async fn ask(&self, raw: &str) -> Result<String, ChatError> {
        let question = Question::parse(raw).map_err(|_| ChatError::Validation)?;
        self.exchange(&question).await
    }

    async fn exchange(&self, question: &Question) -> Result<String, ChatError> {
        info!("Sending question ({} chars)", question.content().chars().count());
        let request = ChatRequest::from(question);

        let response = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, self.gateway.send(&request))
                .await
                .unwrap_or(Err(GatewayError::Timeout)),
            None => self.gateway.send(&request).await,
        };

        let result = response
            .map_err(ChatError::from)
            .and_then(|exchange| exchange.into_answer(&self.config.messages));

        match &result {
            Ok(answer) => debug!("Received answer ({} chars)", answer.chars().count()),
            Err(err) => warn!(kind = err.kind(), "Chat request failed: {}", err),
        }
        result
    }

    fn transition(
        &self,
        step: fn(SubmitState) -> Result<SubmitState, wifichat_domain::DomainError>,
    ) -> Result<(), ChatError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state = step(*state).map_err(|e| {
            warn!("{}", e);
            ChatError::Busy
        })?;
        Ok(())
    }
}

/// Disables the trigger for its lifetime and restores it on drop, so the
/// trigger comes back on success, on handled failure and when the submit
/// future is dropped mid-flight.
struct TriggerGuard<'a> {
    view: &'a dyn ChatView,
    state: &'a Mutex<SubmitState>,
    original_label: String,
}

impl<'a> TriggerGuard<'a> {
    fn engage(view: &'a dyn ChatView, state: &'a Mutex<SubmitState>, busy_label: &str) -> Self {
        let original_label = view.trigger_label();
        view.set_trigger(false, busy_label);
        Self {
            view,
            state,
            original_label,
        }
    }
}

impl Drop for TriggerGuard<'_> {
    fn drop(&mut self) {
        self.view.set_trigger(true, &self.original_label);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state = state.reset();
    }
}
