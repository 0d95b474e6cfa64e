//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::{ReplCommand, resolve_dialog};
use crate::output::console::ConsoleFormatter;
use crate::view::{TerminalFrameHost, TerminalView};
use reedline::{DefaultPrompt, DefaultPromptSegment, EditCommand, Reedline, Signal};
use tracing::debug;
use wifichat_application::{
    ChatView, LazyFrameLoader, PromptTemplateFiller, SubmitQuestionUseCase,
};

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: SubmitQuestionUseCase,
    filler: PromptTemplateFiller,
    loader: LazyFrameLoader,
    view: TerminalView,
    frame_host: TerminalFrameHost,
    endpoint: String,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: SubmitQuestionUseCase, view: TerminalView) -> Self {
        Self {
            use_case,
            filler: PromptTemplateFiller::default(),
            loader: LazyFrameLoader::new(),
            view,
            frame_host: TerminalFrameHost::new(),
            endpoint: String::new(),
        }
    }

    pub fn with_templates(mut self, filler: PromptTemplateFiller) -> Self {
        self.filler = filler;
        self
    }

    pub fn with_frames(mut self, loader: LazyFrameLoader, host: TerminalFrameHost) -> Self {
        self.loader = loader;
        self.frame_host = host;
        self
    }

    /// Endpoint shown in the welcome banner
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();
        self.view.print(&ConsoleFormatter::welcome(&self.endpoint));

        loop {
            if let Some(pending) = self.view.take_focus() {
                line_editor.run_edit_commands(&[EditCommand::InsertString(pending)]);
            }

            let prompt = DefaultPrompt::new(
                DefaultPromptSegment::Basic(self.view.trigger_label()),
                DefaultPromptSegment::Empty,
            );

            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if self.handle_line(&line).await {
                        break;
                    }
                }
                Signal::CtrlC => continue,
                Signal::CtrlD => {
                    self.view.print("Adéu!");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => continue,
            }
        }

        Ok(())
    }

    /// Handle one line of input. Returns true if the REPL should exit.
    pub async fn handle_line(&self, line: &str) -> bool {
        match ReplCommand::parse(line) {
            ReplCommand::Question(text) => {
                self.view.set_input(&text);
                // The outcome is already rendered into the view
                if let Err(e) = self.use_case.submit(&self.view).await {
                    debug!("Submission ended with {}", e.kind());
                }
                false
            }
            ReplCommand::Quit => {
                self.view.print("Adéu!");
                true
            }
            ReplCommand::Help => {
                self.view.print(&ConsoleFormatter::help());
                false
            }
            ReplCommand::Templates => {
                self.view
                    .print(&ConsoleFormatter::templates(self.filler.templates()));
                false
            }
            ReplCommand::Template(arg) => {
                let count = self.filler.templates().len();
                let filled = match arg.parse::<usize>() {
                    Ok(n) if (1..=count).contains(&n) => self.filler.fill(n - 1, &self.view).is_ok(),
                    Ok(_) => false,
                    Err(_) => self.filler.fill_by_label(&arg, &self.view).is_ok(),
                };
                if !filled {
                    self.view
                        .print(&format!("No template '{}' ({} available, see /templates)", arg, count));
                }
                false
            }
            ReplCommand::Maps => {
                let listing = self.loader.statuses();
                self.view.print(&ConsoleFormatter::maps(&listing));
                false
            }
            ReplCommand::Map(name) => {
                let bindings = self.loader.bindings();
                match resolve_dialog(&bindings, &name) {
                    Some(dialog) => {
                        if self.loader.on_dialog_shown(dialog, &self.frame_host) == 0 {
                            self.view.print(&format!("{} already loaded", dialog));
                        }
                    }
                    None => self.view.print(&format!("Unknown map dialog: {}", name)),
                }
                false
            }
            ReplCommand::Unknown(cmd) => {
                self.view
                    .print(&format!("Unknown command: {} (try /help)", cmd));
                false
            }
        }
    }

    pub fn view(&self) -> &TerminalView {
        &self.view
    }

    pub fn use_case(&self) -> &SubmitQuestionUseCase {
        &self.use_case
    }
}
