//! Interactive chat module
//!
//! Provides a line-editor based interactive chat interface.

mod command;
mod repl;

pub use command::{ReplCommand, resolve_dialog};
pub use repl::ChatRepl;
