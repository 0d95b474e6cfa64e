//! Lazy frame loader.
//!
//! Frames inside dialogs start empty. The first "shown" event of a dialog
//! points each of its frames at its configured source; later events leave
//! them alone. Every registered pair keeps its own loaded flag.

use crate::ports::frame_host::FrameHost;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, warn};
use wifichat_domain::{DeferredFrame, FrameBinding};

/// Registry of deferred frames keyed by their dialog.
#[derive(Debug, Default)]
pub struct LazyFrameLoader {
    frames: Mutex<Vec<DeferredFrame>>,
}

impl LazyFrameLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bindings(bindings: impl IntoIterator<Item = FrameBinding>) -> Self {
        let loader = Self::new();
        for binding in bindings {
            loader.register(binding);
        }
        loader
    }

    /// Register a (dialog, frame) pair. Returns `false` when the pair cannot
    /// be bound or is already registered.
    pub fn register(&self, binding: FrameBinding) -> bool {
        if !binding.is_bindable() {
            warn!(
                "Skipping frame binding with missing ids (dialog '{}', frame '{}')",
                binding.dialog, binding.frame
            );
            return false;
        }

        let mut frames = self.lock();
        let duplicate = frames.iter().any(|f| {
            f.binding().dialog == binding.dialog && f.binding().frame == binding.frame
        });
        if duplicate {
            debug!("Frame '{}' already registered for '{}'", binding.frame, binding.dialog);
            return false;
        }
        frames.push(DeferredFrame::new(binding));
        true
    }

    /// Handle a dialog's "shown" event. Returns how many frames were loaded
    /// by this event.
    pub fn on_dialog_shown(&self, dialog: &str, host: &dyn FrameHost) -> usize {
        // The host is called after the lock is released so it may query the loader
        let pending: Vec<(String, String)> = self
            .lock()
            .iter_mut()
            .filter(|f| f.binding().dialog == dialog)
            .filter_map(|f| {
                let name = f.binding().frame.clone();
                f.on_shown().map(|src| (name, src.to_string()))
            })
            .collect();

        for (name, src) in &pending {
            info!("Loading frame '{}' from {}", name, src);
            host.load_frame(name, src);
        }
        pending.len()
    }

    /// Whether the `frame` of `dialog` has received its source. `None` if
    /// the pair is not registered.
    pub fn is_loaded(&self, dialog: &str, frame: &str) -> Option<bool> {
        self.lock()
            .iter()
            .find(|f| f.binding().dialog == dialog && f.binding().frame == frame)
            .map(DeferredFrame::is_loaded)
    }

    /// Registered bindings with their loaded flag, in registration order.
    pub fn statuses(&self) -> Vec<(FrameBinding, bool)> {
        self.lock()
            .iter()
            .map(|f| (f.binding().clone(), f.is_loaded()))
            .collect()
    }

    /// Registered bindings, in registration order.
    pub fn bindings(&self) -> Vec<FrameBinding> {
        self.lock().iter().map(|f| f.binding().clone()).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DeferredFrame>> {
        self.frames.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        loads: Mutex<Vec<(String, String)>>,
    }

    impl FrameHost for RecordingHost {
        fn load_frame(&self, frame: &str, src: &str) {
            self.loads
                .lock()
                .unwrap()
                .push((frame.to_string(), src.to_string()));
        }
    }

    impl RecordingHost {
        fn loads(&self) -> Vec<(String, String)> {
            self.loads.lock().unwrap().clone()
        }
    }

    #[test]
    fn test_unloaded_until_first_show() {
        let loader = LazyFrameLoader::from_bindings(FrameBinding::defaults());
        assert_eq!(loader.is_loaded("signalModal", "iframe-signal"), Some(false));
        assert_eq!(loader.is_loaded("healthModal", "iframe-health"), Some(false));
        assert_eq!(loader.is_loaded("signalModal", "nope"), None);
    }

    #[test]
    fn test_loads_exactly_once() {
        let loader = LazyFrameLoader::from_bindings(FrameBinding::defaults());
        let host = RecordingHost::default();

        assert_eq!(loader.on_dialog_shown("signalModal", &host), 1);
        assert_eq!(loader.on_dialog_shown("signalModal", &host), 0);
        assert_eq!(loader.on_dialog_shown("signalModal", &host), 0);

        assert_eq!(
            host.loads(),
            vec![(
                "iframe-signal".to_string(),
                "mapa_signal_dinamico.html".to_string()
            )]
        );
        assert_eq!(loader.is_loaded("signalModal", "iframe-signal"), Some(true));
    }

    #[test]
    fn test_pairs_are_independent() {
        let loader = LazyFrameLoader::from_bindings(FrameBinding::defaults());
        let host = RecordingHost::default();

        loader.on_dialog_shown("healthModal", &host);

        assert_eq!(loader.is_loaded("healthModal", "iframe-health"), Some(true));
        assert_eq!(loader.is_loaded("signalModal", "iframe-signal"), Some(false));
        assert_eq!(loader.is_loaded("clientsModal", "iframe-clients"), Some(false));

        assert_eq!(loader.on_dialog_shown("clientsModal", &host), 1);
        assert_eq!(host.loads().len(), 2);
    }

    #[test]
    fn test_unknown_dialog_loads_nothing() {
        let loader = LazyFrameLoader::from_bindings(FrameBinding::defaults());
        let host = RecordingHost::default();
        assert_eq!(loader.on_dialog_shown("otherModal", &host), 0);
        assert!(host.loads().is_empty());
    }

    #[test]
    fn test_register_rejects_unbindable_and_duplicates() {
        let loader = LazyFrameLoader::new();
        assert!(loader.register(FrameBinding::new("m", "f", "a.html")));
        assert!(!loader.register(FrameBinding::new("m", "f", "b.html")));
        assert!(!loader.register(FrameBinding::new("", "f", "a.html")));
        assert_eq!(loader.bindings().len(), 1);
    }

    #[test]
    fn test_same_frame_id_under_two_dialogs() {
        let loader = LazyFrameLoader::new();
        loader.register(FrameBinding::new("a", "map", "a.html"));
        loader.register(FrameBinding::new("b", "map", "b.html"));
        let host = RecordingHost::default();

        loader.on_dialog_shown("b", &host);

        assert_eq!(loader.is_loaded("a", "map"), Some(false));
        assert_eq!(loader.is_loaded("b", "map"), Some(true));
        assert_eq!(host.loads(), vec![("map".to_string(), "b.html".to_string())]);
    }

    struct QueryingHost<'a> {
        loader: &'a LazyFrameLoader,
        dialog: &'static str,
        seen: Mutex<Vec<Option<bool>>>,
    }

    impl FrameHost for QueryingHost<'_> {
        fn load_frame(&self, frame: &str, _src: &str) {
            let state = self.loader.is_loaded(self.dialog, frame);
            self.seen.lock().unwrap().push(state);
        }
    }

    #[test]
    fn test_host_may_query_loader_while_loading() {
        let loader = LazyFrameLoader::from_bindings(FrameBinding::defaults());
        let host = QueryingHost {
            loader: &loader,
            dialog: "signalModal",
            seen: Mutex::new(Vec::new()),
        };

        assert_eq!(loader.on_dialog_shown("signalModal", &host), 1);
        assert_eq!(*host.seen.lock().unwrap(), vec![Some(true)]);
    }

    #[test]
    fn test_statuses_track_each_pair() {
        let loader = LazyFrameLoader::from_bindings(FrameBinding::defaults());
        loader.on_dialog_shown("clientsModal", &RecordingHost::default());

        let loaded: Vec<bool> = loader.statuses().into_iter().map(|(_, l)| l).collect();
        assert_eq!(loaded, vec![false, false, true]);
    }

    #[test]
    fn test_dialog_with_several_frames() {
        let loader = LazyFrameLoader::new();
        loader.register(FrameBinding::new("m", "a", "a.html"));
        loader.register(FrameBinding::new("m", "b", "b.html"));
        let host = RecordingHost::default();

        assert_eq!(loader.on_dialog_shown("m", &host), 2);
        assert_eq!(loader.on_dialog_shown("m", &host), 0);
    }
}
