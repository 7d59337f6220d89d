//! Folder list, create and delete handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use foldertree_entity::folder::Folder;

use crate::dto::request::CreateFolderRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{JsonBody, parse_folder_id};
use crate::state::AppState;

/// GET /api/folders
pub async fn list_folders(State(state): State<AppState>) -> Result<Json<Vec<Folder>>, ApiError> {
    let folders = state.folder_service.list_all().await?;
    Ok(Json(folders))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateFolderRequest>,
) -> Result<(StatusCode, Json<Folder>), ApiError> {
    let parent_id = req.parent_folder_id()?;
    let folder = state
        .folder_service
        .create(req.name.as_deref(), parent_id)
        .await?;

    Ok((StatusCode::CREATED, Json(folder)))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_folder_id(&id)?;
    state.folder_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Folder deleted successfully.")))
}
