//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /
pub async fn banner() -> &'static str {
    "Folder Structure Viewer API is running."
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let store = state.folder_service.health().await;

    Json(ApiResponse::ok(HealthResponse {
        status: if store.reachable { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        store: store.backend.to_string(),
        store_reachable: store.reachable,
    }))
}
