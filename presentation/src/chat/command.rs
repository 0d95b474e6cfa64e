//! Slash commands understood by the chat REPL

use wifichat_domain::FrameBinding;

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Plain text to submit
    Question(String),
    Help,
    Quit,
    Templates,
    /// `/t <n|label>`
    Template(String),
    Maps,
    /// `/map <name>`
    Map(String),
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if !trimmed.starts_with('/') {
            return ReplCommand::Question(line.to_string());
        }

        let (cmd, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (trimmed, ""),
        };

        match (cmd, arg) {
            ("/quit" | "/exit" | "/q", _) => ReplCommand::Quit,
            ("/help" | "/h" | "/?", _) => ReplCommand::Help,
            ("/templates", _) => ReplCommand::Templates,
            ("/t" | "/template", "") => ReplCommand::Templates,
            ("/t" | "/template", arg) => ReplCommand::Template(arg.to_string()),
            ("/maps", _) => ReplCommand::Maps,
            ("/map", "") => ReplCommand::Maps,
            ("/map", arg) => ReplCommand::Map(arg.to_string()),
            _ => ReplCommand::Unknown(cmd.to_string()),
        }
    }
}

/// Find the dialog a user means by `name`: exact id first, then an id that
/// starts with it (`signal` → `signalModal`), ignoring case.
pub fn resolve_dialog<'a>(bindings: &'a [FrameBinding], name: &str) -> Option<&'a str> {
    let name = name.to_lowercase();
    bindings
        .iter()
        .find(|b| b.dialog.to_lowercase() == name)
        .or_else(|| {
            bindings
                .iter()
                .find(|b| b.dialog.to_lowercase().starts_with(&name))
        })
        .map(|b| b.dialog.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_question() {
        assert_eq!(
            ReplCommand::parse("  hola  "),
            ReplCommand::Question("  hola  ".to_string())
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(ReplCommand::parse("/q"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/?"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("/t"), ReplCommand::Templates);
        assert_eq!(ReplCommand::parse("/t 2"), ReplCommand::Template("2".into()));
        assert_eq!(
            ReplCommand::parse("/template  Senyal "),
            ReplCommand::Template("Senyal".into())
        );
        assert_eq!(ReplCommand::parse("/map"), ReplCommand::Maps);
        assert_eq!(ReplCommand::parse("/map health"), ReplCommand::Map("health".into()));
        assert_eq!(ReplCommand::parse("/nope x"), ReplCommand::Unknown("/nope".into()));
    }

    #[test]
    fn test_resolve_dialog() {
        let bindings = FrameBinding::defaults();
        assert_eq!(resolve_dialog(&bindings, "signal"), Some("signalModal"));
        assert_eq!(resolve_dialog(&bindings, "HealthModal"), Some("healthModal"));
        assert_eq!(resolve_dialog(&bindings, "cli"), Some("clientsModal"));
        assert_eq!(resolve_dialog(&bindings, "wifi"), None);
    }
}
