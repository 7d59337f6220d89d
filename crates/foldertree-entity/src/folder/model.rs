//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use foldertree_core::types::FolderId;

/// A folder in the hierarchy.
///
/// Serialized with camelCase keys: `{ id, name, parentId, createdAt }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (null for the root folder).
    pub parent_id: Option<FolderId>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is the root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if this folder is a direct child of `parent`.
    pub fn is_child_of(&self, parent: FolderId) -> bool {
        self.parent_id == Some(parent)
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Parent folder (None for the root).
    pub parent_id: Option<FolderId>,
    /// Folder name, already validated and trimmed.
    pub name: String,
}

impl CreateFolder {
    /// Data for the root folder.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            parent_id: None,
            name: name.into(),
        }
    }

    /// Data for a folder under `parent`.
    pub fn child(parent: FolderId, name: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent),
            name: name.into(),
        }
    }

    /// Materialize the record with a fresh id and the current time.
    pub fn into_folder(self) -> Folder {
        Folder {
            id: FolderId::new(),
            name: self.name,
            parent_id: self.parent_id,
            created_at: Utc::now(),
        }
    }
}
