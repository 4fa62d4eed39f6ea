use std::fmt;
use std::sync::Arc;

use crate::core::ElementId;

pub type LoadCallbackFn = Arc<dyn Fn(ElementId) + Send + Sync + 'static>;

/// User hooks invoked when a dispatched fetch resolves.
#[derive(Clone)]
pub struct LoadCallbacks {
    on_success: LoadCallbackFn,
    on_error: LoadCallbackFn,
}

impl Default for LoadCallbacks {
    fn default() -> Self {
        Self {
            on_success: Arc::new(|_| {}),
            on_error: Arc::new(|_| {}),
        }
    }
}

impl fmt::Debug for LoadCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadCallbacks").finish_non_exhaustive()
    }
}

impl LoadCallbacks {
    #[must_use]
    pub fn with_on_success(mut self, callback: LoadCallbackFn) -> Self {
        self.on_success = callback;
        self
    }

    #[must_use]
    pub fn with_on_error(mut self, callback: LoadCallbackFn) -> Self {
        self.on_error = callback;
        self
    }

    pub(super) fn notify_success(&self, id: ElementId) {
        (self.on_success)(id);
    }

    pub(super) fn notify_error(&self, id: ElementId) {
        (self.on_error)(id);
    }
}
