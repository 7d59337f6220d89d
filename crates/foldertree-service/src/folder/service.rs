//! Folder hierarchy operations.

use std::sync::Arc;

use tracing::{debug, info, warn};

use foldertree_core::config::FoldersConfig;
use foldertree_core::error::{AppError, ErrorKind};
use foldertree_core::result::AppResult;
use foldertree_core::types::FolderId;
use foldertree_database::store::FolderStore;
use foldertree_entity::folder::{CreateFolder, Folder};

/// Reachability of the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreHealth {
    /// Backend name (`postgres`, `memory`).
    pub backend: &'static str,
    /// Whether the store answered the health probe.
    pub reachable: bool,
}

/// Enforces the folder tree invariants on top of a [`FolderStore`].
#[derive(Clone)]
pub struct FolderService {
    /// Folder store.
    store: Arc<dyn FolderStore>,
    /// Hierarchy settings.
    config: FoldersConfig,
}

impl std::fmt::Debug for FolderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolderService")
            .field("backend", &self.store.backend())
            .field("config", &self.config)
            .finish()
    }
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(store: Arc<dyn FolderStore>, config: FoldersConfig) -> Self {
        Self { store, config }
    }

    /// Returns every folder, creating the root first if the store is empty.
    pub async fn list_all(&self) -> AppResult<Vec<Folder>> {
        self.ensure_root().await?;
        self.store.find_all().await
    }

    /// Returns the root folder, creating it if none exists.
    ///
    /// Repeated calls return the same folder. If another request creates the
    /// root concurrently, the store rejects the second insert and the winner
    /// is returned instead.
    pub async fn ensure_root(&self) -> AppResult<Folder> {
        if let Some(root) = self.store.find_root().await? {
            return Ok(root);
        }

        match self
            .store
            .insert(&CreateFolder::root(self.config.root_name.clone()))
            .await
        {
            Ok(root) => {
                info!(folder_id = %root.id, name = %root.name, "Root folder created");
                Ok(root)
            }
            Err(e) if e.kind == ErrorKind::Conflict => {
                debug!("Root folder created concurrently, re-reading");
                self.store
                    .find_root()
                    .await?
                    .ok_or_else(|| AppError::internal("Root folder vanished after conflict"))
            }
            Err(e) => Err(e),
        }
    }

    /// Creates a folder named `name` under `parent_id`.
    ///
    /// A missing parent creates the root, which is only allowed while no
    /// root exists. A given parent must refer to an existing folder.
    pub async fn create(
        &self,
        name: Option<&str>,
        parent_id: Option<FolderId>,
    ) -> AppResult<Folder> {
        let name = self.validate_name(name)?;

        match parent_id {
            None => {
                if self.store.find_root().await?.is_some() {
                    return Err(AppError::conflict("A root folder already exists."));
                }
            }
            Some(parent) => {
                if self.store.find_by_id(parent).await?.is_none() {
                    return Err(AppError::validation("Parent folder does not exist."));
                }
            }
        }

        let folder = self
            .store
            .insert(&CreateFolder { parent_id, name })
            .await?;

        info!(
            folder_id = %folder.id,
            parent_id = ?folder.parent_id.map(|p| p.to_string()),
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Deletes a leaf folder and returns the removed record.
    ///
    /// Fails with not-found for unknown ids, forbidden for the root, and
    /// conflict while the folder still has children.
    pub async fn delete(&self, id: FolderId) -> AppResult<Folder> {
        let folder = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found."))?;

        let root = self.store.find_root().await?;
        if folder.is_root() || root.is_some_and(|r| r.id == folder.id) {
            return Err(AppError::forbidden("The root folder cannot be deleted."));
        }

        if self.store.has_children(id).await? {
            return Err(AppError::conflict(
                "Cannot delete a folder that contains other folders.",
            ));
        }

        if !self.store.delete_leaf(id).await? {
            warn!(folder_id = %id, "Folder changed during delete, refusing");
            return Err(AppError::conflict(
                "Folder changed while deleting; it may have gained children.",
            ));
        }

        info!(folder_id = %id, name = %folder.name, "Folder deleted");
        Ok(folder)
    }

    /// Probes the backing store.
    pub async fn health(&self) -> StoreHealth {
        let reachable = match self.store.health_check().await {
            Ok(ok) => ok,
            Err(e) => {
                warn!(error = %e, "Store health check failed");
                false
            }
        };

        StoreHealth {
            backend: self.store.backend(),
            reachable,
        }
    }

    /// Releases the store. Called once during shutdown.
    pub async fn shutdown(&self) {
        self.store.close().await;
    }

    fn validate_name(&self, name: Option<&str>) -> AppResult<String> {
        let name = name.map(str::trim).unwrap_or_default();

        if name.is_empty() {
            return Err(AppError::validation("Folder name is required."));
        }
        if name.chars().count() > self.config.max_name_length {
            return Err(AppError::validation(format!(
                "Folder name must be at most {} characters.",
                self.config.max_name_length
            )));
        }

        Ok(name.to_string())
    }
}
