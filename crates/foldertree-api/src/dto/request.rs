//! Request DTOs.

use serde::{Deserialize, Serialize};

use foldertree_core::error::AppError;
use foldertree_core::types::FolderId;

/// Create folder request: `{ "name": "...", "parentId": "..." | null }`.
///
/// Both fields are optional at the wire level so that a missing name is
/// reported by the service as a validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name.
    #[serde(default)]
    pub name: Option<String>,
    /// Parent folder ID. Null, absent or empty means "no parent".
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl CreateFolderRequest {
    /// Parses the parent id, treating an empty string like null.
    pub fn parent_folder_id(&self) -> Result<Option<FolderId>, AppError> {
        match self.parent_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<FolderId>()
                .map(Some)
                .map_err(|_| AppError::validation(format!("Invalid parentId: {raw}"))),
        }
    }
}
