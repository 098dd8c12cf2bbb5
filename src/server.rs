//! HTTP server initialization and runtime setup.
//!
//! Loads both stores from the data directory and runs the Axum server until
//! Ctrl+C or SIGTERM.

use crate::config::Config;
use crate::infrastructure::persistence::FileKeyValueStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - JSON file storage in `DATA_DIR`
/// - Settings and link stores (bootstrapping missing documents)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - A stored document cannot be read, parsed or bootstrapped
/// - The listen address is invalid or cannot be bound
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let storage = Arc::new(FileKeyValueStore::new(&config.data_dir));
    let state = AppState::load(storage)
        .await
        .with_context(|| format!("Failed to load data from {}", config.data_dir))?;

    let settings = state.config_store.snapshot().await;
    tracing::info!(
        domains = settings.domains.len(),
        links = state.link_store.snapshot().await.len(),
        admin_domain = %settings.admin_domain,
        "Stores loaded"
    );

    let addr: SocketAddr = config
        .bind_addr(settings.port)
        .parse()
        .context("Invalid listen address")?;
    drop(settings);

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
