//! Shared application state.

use std::sync::Arc;

use crate::classifier::Classifier;

/// Shared application state passed to all handlers.
///
/// The classifier is selected once at startup and read-only afterwards, so
/// requests share it without further coordination.
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }
}
