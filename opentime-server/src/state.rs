use std::sync::Arc;

use opentime_core::{Clock, WindowRegistry};

/// Shared, read-only handler state. Cloning is two `Arc` bumps.
#[derive(Clone)]
pub struct AppState {
    pub(crate) registry: Arc<WindowRegistry>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(registry: WindowRegistry, clock: impl Clock + 'static) -> Self {
        Self {
            registry: Arc::new(registry),
            clock: Arc::new(clock),
        }
    }
}
