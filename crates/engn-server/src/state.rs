//! Shared application state for the ENGN-F1 server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`.

use std::sync::Arc;

use engn_core::lead::LeadStore;
use engn_core::schema::LeadSchema;

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// Accepted demo requests.
    pub lead_store: Arc<LeadStore>,
    /// Rules applied to `POST /api/leads` bodies.
    pub schema: LeadSchema,
}

impl AppState {
    #[must_use]
    pub fn new(lead_store: Arc<LeadStore>, schema: LeadSchema) -> Self {
        Self { lead_store, schema }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}
