//! Application state - shared across all handlers.

use std::sync::Arc;

use inkwell_core::ports::PostStore;
use inkwell_infra::InMemoryPostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// State backed by the seeded in-memory store.
    pub fn new() -> Self {
        let posts = InMemoryPostStore::seeded();
        tracing::info!("Post store initialized with seed dataset");
        Self::with_store(Arc::new(posts))
    }

    pub fn with_store(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
