//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use foldertree_core::config::AppConfig;
use foldertree_service::FolderService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. The folder store is
/// reached only through the service, which owns the store handle acquired
/// at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Folder hierarchy service
    pub folder_service: Arc<FolderService>,
    /// When the server started
    pub started_at: Instant,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(config: AppConfig, folder_service: FolderService) -> Self {
        Self {
            config: Arc::new(config),
            folder_service: Arc::new(folder_service),
            started_at: Instant::now(),
        }
    }
}
