//! Terminal implementation of the chat view
//!
//! The input field is the line editor's buffer, the trigger is the prompt,
//! and the output area is the last line printed. While the trigger is
//! disabled a spinner carries the busy label and the interim status; the
//! final output is printed once the trigger is re-enabled.

use crate::output::console::ConsoleFormatter;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::warn;
use wifichat_application::ChatView;

struct TerminalState {
    input: String,
    focus_requested: bool,
    output: Option<String>,
    trigger_enabled: bool,
    trigger_label: String,
    spinner: Option<ProgressBar>,
}

/// Chat view backed by the terminal
pub struct TerminalView {
    state: Mutex<TerminalState>,
    writer: Mutex<Box<dyn Write + Send>>,
    show_progress: bool,
}

impl TerminalView {
    /// Create a view printing to stdout
    pub fn new(trigger_label: impl Into<String>) -> Self {
        Self::with_writer(trigger_label, Box::new(std::io::stdout()))
    }

    /// Create a view printing to `writer`
    pub fn with_writer(trigger_label: impl Into<String>, writer: Box<dyn Write + Send>) -> Self {
        Self {
            state: Mutex::new(TerminalState {
                input: String::new(),
                focus_requested: false,
                output: None,
                trigger_enabled: true,
                trigger_label: trigger_label.into(),
                spinner: None,
            }),
            writer: Mutex::new(writer),
            show_progress: true,
        }
    }

    /// Set whether to show the busy spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn is_trigger_enabled(&self) -> bool {
        self.lock().trigger_enabled
    }

    /// Last text placed in the output area
    pub fn output(&self) -> Option<String> {
        self.lock().output.clone()
    }

    /// Consume a pending focus request, returning the input to edit
    pub fn take_focus(&self) -> Option<String> {
        let mut state = self.lock();
        if std::mem::take(&mut state.focus_requested) {
            Some(state.input.clone())
        } else {
            None
        }
    }

    /// Print a line outside the output area (command listings etc.)
    pub fn print(&self, text: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{}", text).and_then(|_| writer.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    fn lock(&self) -> MutexGuard<'_, TerminalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn spinner(&self, label: &str) -> ProgressBar {
        let pb = if self.show_progress {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {prefix:.bold} {msg}") {
            pb.set_style(style);
        }
        pb.set_prefix(label.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

impl ChatView for TerminalView {
    fn input(&self) -> String {
        self.lock().input.clone()
    }

    fn set_input(&self, text: &str) {
        self.lock().input = text.to_string();
    }

    fn focus_input(&self) {
        self.lock().focus_requested = true;
    }

    fn set_output(&self, text: &str) {
        let pending = {
            let mut state = self.lock();
            state.output = Some(text.to_string());
            match &state.spinner {
                Some(pb) => {
                    pb.set_message(text.to_string());
                    false
                }
                None => true,
            }
        };
        if pending {
            self.print(&ConsoleFormatter::output(text));
        }
    }

    fn trigger_label(&self) -> String {
        self.lock().trigger_label.clone()
    }

    fn set_trigger(&self, enabled: bool, label: &str) {
        let finished = {
            let mut state = self.lock();
            state.trigger_enabled = enabled;
            state.trigger_label = label.to_string();
            if enabled {
                state.spinner.take().map(|pb| {
                    pb.finish_and_clear();
                    state.output.clone()
                })
            } else {
                if state.spinner.is_none() {
                    state.spinner = Some(self.spinner(label));
                }
                None
            }
        };
        if let Some(Some(text)) = finished {
            self.print(&ConsoleFormatter::output(&text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn view() -> (TerminalView, SharedBuffer) {
        colored::control::set_override(false);
        let buffer = SharedBuffer::default();
        let view = TerminalView::with_writer("Envia", Box::new(buffer.clone())).with_progress(false);
        (view, buffer)
    }

    #[test]
    fn test_output_printed_immediately_when_idle() {
        let (view, buffer) = view();
        view.set_output("Introdueix una pregunta");
        assert_eq!(buffer.contents(), "◆ Introdueix una pregunta\n");
    }

    #[test]
    fn test_output_deferred_until_trigger_restored() {
        let (view, buffer) = view();

        view.set_trigger(false, "Enviant…");
        assert!(!view.is_trigger_enabled());
        view.set_output("Enviant la consulta…");
        view.set_output("Hola!");
        assert_eq!(buffer.contents(), "");

        view.set_trigger(true, "Envia");
        assert!(view.is_trigger_enabled());
        assert_eq!(view.trigger_label(), "Envia");
        assert_eq!(buffer.contents(), "◆ Hola!\n");
    }

    #[test]
    fn test_focus_request_is_consumed_once() {
        let (view, _) = view();
        view.set_input("prompt");
        assert_eq!(view.take_focus(), None);

        view.focus_input();
        assert_eq!(view.take_focus(), Some("prompt".to_string()));
        assert_eq!(view.take_focus(), None);
    }
}
