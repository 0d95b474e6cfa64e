//! Console output formatting for the chat client

use colored::Colorize;
use wifichat_domain::{ChatError, FrameBinding, PromptTemplate};

/// Formats chat client output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner shown when the REPL starts
    pub fn welcome(endpoint: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("WiFi UAB - Assistent"));
        output.push('\n');
        output.push_str(&format!("{} {}\n\n", "Endpoint:".cyan().bold(), endpoint));
        output.push_str(&Self::help());
        output
    }

    /// REPL command reference
    pub fn help() -> String {
        let mut output = format!("{}\n", "Commands:".cyan().bold());
        for (cmd, desc) in [
            ("/help, /h, /?", "Show this help"),
            ("/templates", "List prompt templates"),
            ("/t <n|label>", "Put a template into the input"),
            ("/maps", "List map dialogs"),
            ("/map <name>", "Open a map dialog"),
            ("/quit, /exit, /q", "Exit chat"),
        ] {
            output.push_str(&format!("  {:<18} - {}\n", cmd, desc));
        }
        output
    }

    /// Text placed in the output area
    pub fn output(text: &str) -> String {
        format!("{} {}", "◆".green().bold(), text)
    }

    /// One-shot mode error line
    pub fn error(err: &ChatError, text: &str) -> String {
        format!("{} {}", format!("[{}]", err.kind()).red().bold(), text)
    }

    pub fn templates(templates: &[PromptTemplate]) -> String {
        if templates.is_empty() {
            return "No prompt templates configured.".dimmed().to_string();
        }
        let mut output = format!("{}\n", "Prompt templates:".cyan().bold());
        for (i, t) in templates.iter().enumerate() {
            output.push_str(&format!("  {}. {:<10} {}\n", i + 1, t.label.bold(), t.prompt.dimmed()));
        }
        output
    }

    pub fn maps(bindings: &[(FrameBinding, bool)]) -> String {
        if bindings.is_empty() {
            return "No map dialogs configured.".dimmed().to_string();
        }
        let mut output = format!("{}\n", "Map dialogs:".cyan().bold());
        for (b, loaded) in bindings {
            let state = if *loaded { "loaded".green() } else { "not loaded".dimmed() };
            output.push_str(&format!("  {:<14} {:<16} {}\n", b.dialog, b.frame, state));
        }
        output
    }

    pub fn frame_loaded(frame: &str, src: &str) -> String {
        format!("{} {} <- {}", "map".yellow().bold(), frame, src)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_contains_text() {
        colored::control::set_override(false);
        assert_eq!(ConsoleFormatter::output("Hola"), "◆ Hola");
    }

    #[test]
    fn test_templates_listing_is_one_based() {
        colored::control::set_override(false);
        let listing = ConsoleFormatter::templates(&[PromptTemplate::new("Senyal", "Quin AP?")]);
        assert!(listing.contains("1. Senyal"));
        assert!(listing.contains("Quin AP?"));
    }

    #[test]
    fn test_maps_listing_shows_state() {
        colored::control::set_override(false);
        let listing = ConsoleFormatter::maps(&[
            (FrameBinding::new("signalModal", "iframe-signal", "a.html"), true),
            (FrameBinding::new("healthModal", "iframe-health", "b.html"), false),
        ]);
        assert!(listing.contains("signalModal"));
        assert!(listing.contains("not loaded"));
    }
}
