//! Chat exchange: wire shapes, error taxonomy, submit state and UI strings.

pub mod error;
pub mod exchange;
pub mod messages;
pub mod state;
