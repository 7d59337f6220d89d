//! The folder store abstraction.
//!
//! [`FolderStore`] is the only way the service layer touches persisted
//! folders. Implementations must uphold two constraints themselves, so that
//! racing requests cannot break the hierarchy even though the service checks
//! them first:
//!
//! - at most one folder has no parent;
//! - [`FolderStore::delete_leaf`] never removes the root or a folder that
//!   still has children.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use foldertree_core::config::{DatabaseConfig, StoreBackend};
use foldertree_core::result::AppResult;
use foldertree_core::types::FolderId;
use foldertree_entity::folder::{CreateFolder, Folder};

use crate::connection::DatabasePool;
use crate::migration::run_migrations;
use crate::repositories::{FolderRepository, MemoryFolderRepository};

/// Persistent collection of folder records.
#[async_trait]
pub trait FolderStore: Send + Sync + 'static {
    /// Short name of the backend, for logs and health output.
    fn backend(&self) -> &'static str;

    /// Insert a new folder and return it with its assigned id.
    ///
    /// Fails with a conflict error when inserting a second root, and with a
    /// validation error when the parent does not exist.
    async fn insert(&self, data: &CreateFolder) -> AppResult<Folder>;

    /// Every folder, in store iteration order.
    async fn find_all(&self) -> AppResult<Vec<Folder>>;

    /// Find a folder by id.
    async fn find_by_id(&self, id: FolderId) -> AppResult<Option<Folder>>;

    /// The folder without a parent, if one exists.
    async fn find_root(&self) -> AppResult<Option<Folder>>;

    /// Whether any folder names `id` as its parent.
    async fn has_children(&self, id: FolderId) -> AppResult<bool>;

    /// Delete `id` only if it is neither the root nor has children.
    ///
    /// Returns `true` if a record was removed.
    async fn delete_leaf(&self, id: FolderId) -> AppResult<bool>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Release connections. Called once on shutdown.
    async fn close(&self) {}
}

/// Open the store selected by configuration.
///
/// For PostgreSQL this connects the pool and, when enabled, runs pending
/// migrations.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn FolderStore>> {
    match config.backend {
        StoreBackend::Memory => {
            info!("Using in-memory folder store; data is lost on restart");
            Ok(Arc::new(MemoryFolderRepository::new()))
        }
        StoreBackend::Postgres => {
            let pool = DatabasePool::connect(config).await?;
            if config.auto_migrate {
                run_migrations(pool.pool()).await?;
            }
            Ok(Arc::new(FolderRepository::new(pool.into_pool())))
        }
    }
}
