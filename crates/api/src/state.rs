//! Shared application state.

use std::sync::Arc;

use db::DocumentStore;

/// State handed to every handler.
///
/// The store is built once at start-up and injected here, so handlers never
/// reach for a global and tests can swap in any [`DocumentStore`].
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}
