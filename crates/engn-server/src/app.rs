//! Router assembly.
//!
//! [`build_router`] is what `main` serves and what the integration tests
//! drive with `oneshot`. It mounts the JSON API under `/api`, hangs the
//! front-end off the fallback, and wraps everything in the shared layers.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::middleware as axum_mw;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::panic_response;
use crate::middleware::api_access_log;
use crate::routes;
use crate::state::AppState;

/// Build the complete application router.
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    // One cap shared by every method on `/api/leads`; excess requests queue.
    let lead_routes = Router::new()
        .nest("/api/leads", routes::leads::router())
        .layer(GlobalConcurrencyLimitLayer::new(config.intake_concurrency));

    let api = Router::new()
        .merge(lead_routes)
        .nest("/api/metrics", routes::metrics::router())
        .nest("/api/use-cases", routes::use_cases::router());

    let app = routes::ui::attach(api, &config.static_dir);

    with_middleware(app, config).with_state(state)
}

/// Wrap `router` in the layers every response passes through.
///
/// The panic catcher is outermost so that even a failure inside another
/// layer becomes a 500 response.
pub fn with_middleware(
    router: Router<Arc<AppState>>,
    config: &ServerConfig,
) -> Router<Arc<AppState>> {
    // The site is public, so any origin may call the API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    router
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(axum_mw::from_fn(api_access_log))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(CatchPanicLayer::custom(panic_response))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use engn_core::lead::LeadStore;
    use engn_core::schema::LeadSchema;
    use engn_storage::MemoryBackend;
    use tower::ServiceExt;

    use super::*;

    fn state() -> Arc<AppState> {
        let store = LeadStore::new(Arc::new(MemoryBackend::new()));
        Arc::new(AppState::new(Arc::new(store), LeadSchema::contact_form()))
    }

    async fn boom() -> &'static str {
        panic!("handler exploded");
    }

    #[tokio::test]
    async fn handler_panic_becomes_generic_500() {
        let router = Router::new().route("/api/boom", get(boom));
        let app = with_middleware(router, &ServerConfig::default()).with_state(state());

        let response = app
            .oneshot(Request::get("/api/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Internal Server Error");
    }

    #[tokio::test]
    async fn security_headers_are_set() {
        let router = Router::new().route("/api/ping", get(|| async { "pong" }));
        let app = with_middleware(router, &ServerConfig::default()).with_state(state());

        let response = app
            .oneshot(Request::get("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
    }
}
