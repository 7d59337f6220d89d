//! In-memory folder store.
//!
//! Keeps folders in a `Vec` behind a `tokio::sync::RwLock`, preserving
//! insertion order. It enforces the same constraints the PostgreSQL schema
//! does (single root, existing parent, restricted delete), with every
//! operation atomic under the lock. Nothing survives a restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use foldertree_core::error::AppError;
use foldertree_core::result::AppResult;
use foldertree_core::types::FolderId;
use foldertree_entity::folder::{CreateFolder, Folder};

use crate::store::FolderStore;

/// Process-local folder store.
#[derive(Debug, Default)]
pub struct MemoryFolderRepository {
    folders: RwLock<Vec<Folder>>,
}

impl MemoryFolderRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored folders.
    pub async fn len(&self) -> usize {
        self.folders.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.folders.read().await.is_empty()
    }
}

#[async_trait]
impl FolderStore for MemoryFolderRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, data: &CreateFolder) -> AppResult<Folder> {
        let mut folders = self.folders.write().await;

        match data.parent_id {
            None if folders.iter().any(Folder::is_root) => {
                return Err(AppError::conflict("A root folder already exists."));
            }
            Some(parent) if !folders.iter().any(|f| f.id == parent) => {
                return Err(AppError::validation("Parent folder does not exist."));
            }
            _ => {}
        }

        let folder = data.clone().into_folder();
        folders.push(folder.clone());
        Ok(folder)
    }

    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        Ok(self.folders.read().await.clone())
    }

    async fn find_by_id(&self, id: FolderId) -> AppResult<Option<Folder>> {
        Ok(self.folders.read().await.iter().find(|f| f.id == id).cloned())
    }

    async fn find_root(&self) -> AppResult<Option<Folder>> {
        Ok(self.folders.read().await.iter().find(|f| f.is_root()).cloned())
    }

    async fn has_children(&self, id: FolderId) -> AppResult<bool> {
        Ok(self.folders.read().await.iter().any(|f| f.is_child_of(id)))
    }

    async fn delete_leaf(&self, id: FolderId) -> AppResult<bool> {
        let mut folders = self.folders.write().await;

        let Some(pos) = folders.iter().position(|f| f.id == id) else {
            return Ok(false);
        };
        if folders[pos].is_root() || folders.iter().any(|f| f.is_child_of(id)) {
            return Ok(false);
        }

        folders.remove(pos);
        Ok(true)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldertree_core::error::ErrorKind;

    #[tokio::test]
    async fn test_insert_preserves_order() {
        let store = MemoryFolderRepository::new();
        let root = store.insert(&CreateFolder::root("root")).await.unwrap();
        let a = store.insert(&CreateFolder::child(root.id, "a")).await.unwrap();
        let b = store.insert(&CreateFolder::child(root.id, "b")).await.unwrap();

        let ids: Vec<_> = store.find_all().await.unwrap().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![root.id, a.id, b.id]);
    }

    #[tokio::test]
    async fn test_second_root_is_rejected() {
        let store = MemoryFolderRepository::new();
        store.insert(&CreateFolder::root("root")).await.unwrap();

        let err = store.insert(&CreateFolder::root("again")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_parent_is_rejected() {
        let store = MemoryFolderRepository::new();

        let err = store
            .insert(&CreateFolder::child(FolderId::new(), "orphan"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_leaf_guards() {
        let store = MemoryFolderRepository::new();
        let root = store.insert(&CreateFolder::root("root")).await.unwrap();
        let a = store.insert(&CreateFolder::child(root.id, "a")).await.unwrap();
        let b = store.insert(&CreateFolder::child(a.id, "b")).await.unwrap();

        assert!(!store.delete_leaf(root.id).await.unwrap());
        assert!(!store.delete_leaf(a.id).await.unwrap());
        assert!(!store.delete_leaf(FolderId::new()).await.unwrap());

        assert!(store.delete_leaf(b.id).await.unwrap());
        assert!(!store.has_children(a.id).await.unwrap());
        assert!(store.delete_leaf(a.id).await.unwrap());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_root_and_by_id() {
        let store = MemoryFolderRepository::new();
        assert!(store.find_root().await.unwrap().is_none());

        let root = store.insert(&CreateFolder::root("root")).await.unwrap();
        let a = store.insert(&CreateFolder::child(root.id, "a")).await.unwrap();

        assert_eq!(store.find_root().await.unwrap(), Some(root));
        assert_eq!(store.find_by_id(a.id).await.unwrap().map(|f| f.name), Some("a".into()));
        assert!(store.find_by_id(FolderId::new()).await.unwrap().is_none());
    }
}
