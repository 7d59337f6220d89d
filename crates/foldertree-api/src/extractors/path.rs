//! Typed path parameter helpers.

use foldertree_core::error::AppError;
use foldertree_core::types::FolderId;

/// Parses a folder id from a path segment.
///
/// A segment that is not a valid id cannot name any folder, so it is reported
/// as not found rather than as a validation error.
pub fn parse_folder_id(s: &str) -> Result<FolderId, AppError> {
    s.parse::<FolderId>()
        .map_err(|_| AppError::not_found("Folder not found."))
}
