//! ENGN-F1 server entry point.
//!
//! Loads configuration, sets up structured logging and the in-memory lead
//! store, then serves the Axum application until Ctrl-C or SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use engn_core::lead::LeadStore;
use engn_core::schema::LeadSchema;
use engn_storage::{MemoryBackend, StorageBackend};

use engn_server::app::build_router;
use engn_server::config::ServerConfig;
use engn_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("invalid server configuration")?;

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(schema = %config.lead_schema, "ENGN-F1 starting");

    let state = build_app_state(&config).await?;
    let app = build_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "ENGN-F1 server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("ENGN-F1 server stopped");
    Ok(())
}

/// Build the shared application state.
async fn build_app_state(config: &ServerConfig) -> anyhow::Result<Arc<AppState>> {
    info!("using in-memory storage (leads will not persist)");
    let storage: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());

    let lead_store = LeadStore::open(storage)
        .await
        .context("failed to open lead store")?;

    Ok(Arc::new(AppState::new(
        Arc::new(lead_store),
        LeadSchema::new(config.lead_schema),
    )))
}

/// Wait for Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
