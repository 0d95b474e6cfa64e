//! Embedded frames whose content is loaded on first display

use serde::{Deserialize, Serialize};

/// Configuration of one (dialog, frame) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameBinding {
    /// Dialog whose "shown" event triggers the load
    pub dialog: String,
    /// Frame inside that dialog
    pub frame: String,
    /// Source the frame receives on first show
    pub src: String,
}

impl FrameBinding {
    pub fn new(
        dialog: impl Into<String>,
        frame: impl Into<String>,
        src: impl Into<String>,
    ) -> Self {
        Self {
            dialog: dialog.into(),
            frame: frame.into(),
            src: src.into(),
        }
    }

    /// A binding without both ids has nothing to attach to
    pub fn is_bindable(&self) -> bool {
        !self.dialog.trim().is_empty() && !self.frame.trim().is_empty()
    }

    /// The WiFi map dialogs of the dashboard
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("signalModal", "iframe-signal", "mapa_signal_dinamico.html"),
            Self::new("healthModal", "iframe-health", "mapa_health_dinamico.html"),
            Self::new("clientsModal", "iframe-clients", "mapa_clientes_dinamico.html"),
        ]
    }
}

/// A frame that starts without a source and receives it at most once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredFrame {
    binding: FrameBinding,
    loaded: bool,
}

impl DeferredFrame {
    pub fn new(binding: FrameBinding) -> Self {
        Self {
            binding,
            loaded: false,
        }
    }

    pub fn binding(&self) -> &FrameBinding {
        &self.binding
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Handle a "shown" event of the owning dialog.
    ///
    /// Returns the source to assign on the first call and `None` afterwards.
    pub fn on_shown(&mut self) -> Option<&str> {
        if self.loaded {
            return None;
        }
        self.loaded = true;
        Some(&self.binding.src)
    }
}
