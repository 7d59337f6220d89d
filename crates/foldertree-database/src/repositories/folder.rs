//! PostgreSQL folder repository.

use async_trait::async_trait;
use sqlx::PgPool;

use foldertree_core::error::{AppError, ErrorKind};
use foldertree_core::result::AppResult;
use foldertree_core::types::FolderId;
use foldertree_entity::folder::{CreateFolder, Folder};

use crate::store::FolderStore;

/// Unique index allowing a single row with `parent_id IS NULL`.
const SINGLE_ROOT_INDEX: &str = "folders_single_root";

/// Repository for folder CRUD backed by the `folders` table.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert(&self, data: &CreateFolder) -> AppResult<Folder> {
        let record = data.clone().into_folder();

        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (id, name, parent_id, created_at) \
             VALUES ($1, $2, $3, $4) RETURNING id, name, parent_id, created_at",
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(record.parent_id)
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(SINGLE_ROOT_INDEX) =>
            {
                AppError::conflict("A root folder already exists.")
            }
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::validation("Parent folder does not exist.")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT id, name, parent_id, created_at FROM folders ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    async fn find_by_id(&self, id: FolderId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT id, name, parent_id, created_at FROM folders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn find_root(&self) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT id, name, parent_id, created_at FROM folders WHERE parent_id IS NULL LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find root folder", e))
    }

    async fn has_children(&self, id: FolderId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM folders WHERE parent_id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check children", e))
    }

    async fn delete_leaf(&self, id: FolderId) -> AppResult<bool> {
        // The foreign key rejects the delete if a child is inserted between
        // the NOT EXISTS check and the row removal.
        let result = sqlx::query(
            "DELETE FROM folders f WHERE f.id = $1 AND f.parent_id IS NOT NULL \
             AND NOT EXISTS (SELECT 1 FROM folders c WHERE c.parent_id = f.id)",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::conflict("Cannot delete a folder that contains other folders.")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to delete folder", e),
        })?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
