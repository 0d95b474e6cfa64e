//! Presentation layer for wifi-chat
//!
//! This crate contains CLI definitions, the terminal view, output
//! formatting, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod view;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use view::{TerminalFrameHost, TerminalView};
