//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::engine::AlertsEngine;

/// State handed to every handler through axum's `State` extractor
pub struct AppState {
    /// The alerts engine; read-only, so no lock is needed
    pub engine: Arc<AlertsEngine>,
}

impl AppState {
    pub fn new(engine: Arc<AlertsEngine>) -> Self {
        Self { engine }
    }
}
