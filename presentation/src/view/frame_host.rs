//! Terminal frame host
//!
//! A terminal cannot embed a page, so "loading" a frame resolves its source
//! against a base location and reports where the map can be opened.

use crate::output::console::ConsoleFormatter;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use wifichat_application::FrameHost;

/// Frame host that prints each load
pub struct TerminalFrameHost {
    base: Option<PathBuf>,
    loaded: Mutex<Vec<(String, String)>>,
}

impl TerminalFrameHost {
    pub fn new() -> Self {
        Self {
            base: None,
            loaded: Mutex::new(Vec::new()),
        }
    }

    /// Resolve relative sources against `base`
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Frames loaded so far with their resolved source
    pub fn loaded(&self) -> Vec<(String, String)> {
        self.loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn resolve(&self, src: &str) -> String {
        let is_absolute = src.contains("://") || src.starts_with('/');
        match &self.base {
            Some(base) if !is_absolute => base.join(src).display().to_string(),
            _ => src.to_string(),
        }
    }
}

impl Default for TerminalFrameHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameHost for TerminalFrameHost {
    fn load_frame(&self, frame: &str, src: &str) {
        let resolved = self.resolve(src);
        println!("{}", ConsoleFormatter::frame_loaded(frame, &resolved));
        self.loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((frame.to_string(), resolved));
    }
}
