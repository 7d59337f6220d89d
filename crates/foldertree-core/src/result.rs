//! Convenience result type alias for FolderTree.

use crate::error::AppError;

/// A specialized `Result` type for FolderTree operations.
///
/// Every crate in the workspace returns `AppResult<T>` instead of spelling
/// out `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
