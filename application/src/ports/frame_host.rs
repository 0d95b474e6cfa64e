//! Frame host port
//!
//! Gives the lazy frame loader a way to point an embedded frame at its
//! content without knowing how the page renders it.

/// Something that can assign a source to an embedded frame
pub trait FrameHost: Send + Sync {
    fn load_frame(&self, frame: &str, src: &str);
}

/// Frame host that ignores every load
pub struct NoFrameHost;

impl FrameHost for NoFrameHost {
    fn load_frame(&self, _frame: &str, _src: &str) {}
}
