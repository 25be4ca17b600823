//! Access logging for the JSON API.
//!
//! Every request under `/api` gets one log line with method, path, status,
//! and latency once the response is ready. Bodies are never logged: lead
//! submissions carry personal data.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Middleware that logs `/api` requests after they complete.
pub async fn api_access_log(req: Request, next: Next) -> Response {
    if !req.uri().path().starts_with("/api") {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let status = response.status().as_u16();
    if response.status().is_server_error() {
        warn!(%method, %path, status, elapsed_ms, "api request failed");
    } else {
        info!(%method, %path, status, elapsed_ms, "api request");
    }

    response
}
