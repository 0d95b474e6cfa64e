//! Terminal adapters for the view and frame host ports

mod frame_host;
mod terminal;

pub use frame_host::TerminalFrameHost;
pub use terminal::TerminalView;
