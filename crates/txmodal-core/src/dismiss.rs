use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type DismissCallback = Arc<dyn Fn() + Send + Sync>;

/// The single "done" signal every view receives.
///
/// Clones share one fired flag. Only the first `dismiss` across all clones runs
/// the callback; the host issues a fresh handle when the dialog reopens.
#[derive(Clone)]
pub struct DismissHandle {
    fired: Arc<AtomicBool>,
    callback: Option<DismissCallback>,
}

impl DismissHandle {
    pub fn new(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            fired: Arc::new(AtomicBool::new(false)),
            callback: Some(Arc::new(callback)),
        }
    }

    /// A handle with no callback; the host polls `is_dismissed` instead.
    pub fn detached() -> Self {
        Self {
            fired: Arc::new(AtomicBool::new(false)),
            callback: None,
        }
    }

    /// Returns `true` only for the call that actually dismissed.
    pub fn dismiss(&self) -> bool {
        if self.fired.swap(true, Ordering::SeqCst) {
            return false;
        }
        tracing::debug!("confirmation dialog dismissed");
        if let Some(callback) = &self.callback {
            callback();
        }
        true
    }

    pub fn is_dismissed(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

impl Default for DismissHandle {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for DismissHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissHandle")
            .field("fired", &self.is_dismissed())
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
