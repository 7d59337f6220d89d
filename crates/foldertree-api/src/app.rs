//! Application builder: wires store, service, router and state into a server.

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;

use foldertree_core::config::AppConfig;
use foldertree_core::error::{AppError, ErrorKind};
use foldertree_database::open_store;
use foldertree_service::FolderService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the folder API server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting folder API server...");

    let store = open_store(&config.database).await?;
    tracing::info!(backend = store.backend(), "Folder store ready");

    let service = FolderService::new(store, config.folders.clone());
    let bind_addr = config.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = AppState::new(config, service);
    let folder_service = state.folder_service.clone();
    let app = build_app(state);

    let listener = TcpListener::bind(&bind_addr).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Internal,
            format!("Failed to bind to {bind_addr}: {e}"),
            e,
        )
    })?;

    tracing::info!("Server listening on http://{bind_addr}");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")));

    tracing::info!("Server stopped, releasing folder store");
    if tokio::time::timeout(grace, folder_service.shutdown())
        .await
        .is_err()
    {
        tracing::warn!(
            grace_seconds = grace.as_secs(),
            "Folder store did not close within the grace period"
        );
    }

    served
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
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
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
