//! Application state for the web layer.

use std::sync::Arc;

use crate::search::SearchEngine;

/// Shared application state.
///
/// The engine is immutable after startup, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// The route search engine, built once at startup.
    pub engine: Arc<SearchEngine>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
