//! Use-case showcase endpoint: `/api/use-cases`

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use engn_core::showcase::{USE_CASES, UseCase};

use crate::state::AppState;

/// Build the `/api/use-cases` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(use_cases))
}

async fn use_cases() -> Json<&'static [UseCase]> {
    Json(&USE_CASES[..])
}
