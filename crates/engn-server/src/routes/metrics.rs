//! Dashboard metrics endpoint: `/api/metrics`
//!
//! Fresh random numbers on every call. Responses are marked non-cacheable
//! for browsers and intermediate caches.

use std::sync::Arc;

use axum::http::{HeaderName, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use engn_core::showcase::Metrics;

use crate::state::AppState;

/// Build the `/api/metrics` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(metrics))
}

/// `GET /api/metrics`: randomized display metrics.
async fn metrics() -> impl IntoResponse {
    (
        [
            (
                header::CACHE_CONTROL,
                "no-store, no-cache, must-revalidate, proxy-revalidate",
            ),
            (header::PRAGMA, "no-cache"),
            (header::EXPIRES, "0"),
            (HeaderName::from_static("surrogate-control"), "no-store"),
        ],
        Json(Metrics::sample()),
    )
}
