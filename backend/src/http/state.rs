//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::TimelineConfig;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup
    pub config: Arc<TimelineConfig>,
}

impl AppState {
    /// Create a new application state with the given configuration.
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
