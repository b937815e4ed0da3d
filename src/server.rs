//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, Axum server lifecycle and graceful shutdown.

use crate::application::services::LinkService;
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::Store;
use crate::infrastructure::persistence::{FileStore, MemoryStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the store selected by the configuration.
///
/// # Errors
///
/// Returns an error if the file backend is selected and its document cannot
/// be created.
pub async fn build_store(config: &Config) -> Result<Arc<dyn Store>> {
    let store: Arc<dyn Store> = match config.store_backend {
        StoreBackend::File => {
            let store = FileStore::open(&config.store_path).await.with_context(|| {
                format!(
                    "Failed to open store file {}",
                    config.store_path.display()
                )
            })?;
            tracing::info!("Store: file ({})", store.path().display());
            Arc::new(store)
        }
        StoreBackend::Memory => {
            tracing::info!("Store: memory");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(store)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Store backend
/// - Link service
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;

    let link_service = Arc::new(LinkService::new(store, config.short_domain.clone()));
    let state = AppState::new(link_service);

    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
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

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
