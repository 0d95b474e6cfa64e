//! Chat view port
//!
//! The capabilities the chat flow needs from whatever hosts it: an input
//! field, a trigger control and an output area. Methods take `&self` so a
//! view can be shared with the event loop that drives it; implementations
//! use interior mutability.

/// UI surface of the chat client
pub trait ChatView: Send + Sync {
    /// Current content of the input field
    fn input(&self) -> String;

    /// Replace the content of the input field
    fn set_input(&self, text: &str);

    /// Move focus back to the input field
    fn focus_input(&self);

    /// Replace the text of the output area
    fn set_output(&self, text: &str);

    /// Current label of the trigger control
    fn trigger_label(&self) -> String;

    /// Enable or disable the trigger control and change its label
    fn set_trigger(&self, enabled: bool, label: &str);
}
