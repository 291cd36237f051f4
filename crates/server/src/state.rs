use std::sync::Arc;

use crate::docmosis::DocumentRenderer;
use crate::notify::Notifier;

/// Shared handles injected into every callback handler.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<dyn DocumentRenderer>,
    pub notifier: Arc<Notifier>,
}

impl AppState {
    pub fn new(renderer: Arc<dyn DocumentRenderer>, notifier: Arc<Notifier>) -> Self {
        Self { renderer, notifier }
    }
}
