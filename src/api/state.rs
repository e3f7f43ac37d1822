use std::sync::Arc;

use crate::engine::RecommenderEngine;

/// Shared application state
///
/// The engine is built once at startup and never mutated, so concurrent
/// handlers share it through a plain `Arc` — no lock needed.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommenderEngine>,
}

impl AppState {
    pub fn new(engine: RecommenderEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
