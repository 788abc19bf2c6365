//! Application state shared by all handlers.

use std::sync::Arc;

use crate::registry::LockRegistry;

/// Shared application state for the HTTP server.
///
/// The registry synchronizes internally per table, so handlers share it
/// through a plain `Arc` with no outer mutex.
#[derive(Clone, Default)]
pub struct AppState {
    /// The single lock registry for this process.
    pub registry: Arc<LockRegistry>,
}

impl AppState {
    /// Creates state around an empty registry. The expiry sweep is started
    /// separately so its handle stays with whoever owns the process lifetime.
    pub fn new() -> Self {
        AppState {
            registry: Arc::new(LockRegistry::new()),
        }
    }

    pub fn with_registry(registry: Arc<LockRegistry>) -> Self {
        AppState { registry }
    }
}
