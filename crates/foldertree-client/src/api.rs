//! Typed HTTP client for the folder API.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use tracing::debug;

use foldertree_core::config::ClientConfig;
use foldertree_core::error::{AppError, ErrorKind};
use foldertree_core::result::AppResult;
use foldertree_core::types::FolderId;
use foldertree_entity::folder::Folder;

/// Body sent to `POST /api/folders`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateFolderBody<'a> {
    name: &'a str,
    parent_id: Option<FolderId>,
}

/// Error body returned by the API: `{ error, message }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Body of a successful delete.
#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// Client for the `/api/folders` endpoints.
#[derive(Debug, Clone)]
pub struct FolderApiClient {
    http: Client,
    base_url: String,
}

impl FolderApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the flat folder list.
    pub async fn list_folders(&self) -> AppResult<Vec<Folder>> {
        let url = self.url("/api/folders");
        debug!(%url, "Fetching folders");

        let resp = self.http.get(&url).send().await.map_err(network_error)?;
        decode(resp).await
    }

    /// Create a folder under `parent_id`, or the root when `None`.
    pub async fn create_folder(&self, name: &str, parent_id: Option<FolderId>) -> AppResult<Folder> {
        let url = self.url("/api/folders");
        debug!(%url, name, parent_id = ?parent_id, "Creating folder");

        let resp = self
            .http
            .post(&url)
            .json(&CreateFolderBody { name, parent_id })
            .send()
            .await
            .map_err(network_error)?;
        decode(resp).await
    }

    /// Delete a folder. Returns the server's confirmation message.
    pub async fn delete_folder(&self, id: FolderId) -> AppResult<String> {
        let url = self.url(&format!("/api/folders/{id}"));
        debug!(%url, "Deleting folder");

        let resp = self.http.delete(&url).send().await.map_err(network_error)?;
        let body: MessageBody = decode(resp).await?;
        Ok(body.message)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn network_error(e: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::ExternalService,
        format!("Could not reach the folder API: {e}"),
        e,
    )
}

/// Decode a 2xx body, or turn an error response into an [`AppError`]
/// carrying the server's message.
async fn decode<T: DeserializeOwned>(resp: Response) -> AppResult<T> {
    let status = resp.status();

    if status.is_success() {
        return resp.json::<T>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Unexpected response from the folder API: {e}"),
                e,
            )
        });
    }

    let text = resp.text().await.unwrap_or_default();
    Err(error_from_response(status, &text))
}

/// Map an error status and body to an error of the matching kind.
fn error_from_response(status: StatusCode, body: &str) -> AppError {
    let body = serde_json::from_str::<ErrorBody>(body).ok();
    let code = body.as_ref().and_then(|b| b.error.as_deref());

    let kind = match status {
        StatusCode::BAD_REQUEST if code == Some("CONFLICT") => ErrorKind::Conflict,
        StatusCode::BAD_REQUEST => ErrorKind::Validation,
        StatusCode::FORBIDDEN => ErrorKind::Forbidden,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::SERVICE_UNAVAILABLE => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::ExternalService,
    };

    let message = body
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("Request failed with status {status}"));

    AppError::new(kind, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_uses_server_message() {
        let err = error_from_response(
            StatusCode::FORBIDDEN,
            r#"{"error":"FORBIDDEN","message":"The root folder cannot be deleted."}"#,
        );
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.message, "The root folder cannot be deleted.");
    }

    #[test]
    fn test_bad_request_keeps_conflict_code() {
        let err = error_from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error":"CONFLICT","message":"Cannot delete a folder that contains other folders."}"#,
        );
        assert_eq!(err.kind, ErrorKind::Conflict);

        let err = error_from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error":"VALIDATION_ERROR","message":"Folder name is required."}"#,
        );
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_error_without_json_body() {
        let err = error_from_response(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.kind, ErrorKind::ExternalService);
        assert!(err.message.contains("502"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = FolderApiClient::new(&ClientConfig {
            api_url: "http://localhost:5000/".into(),
            timeout_seconds: 1,
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/api/folders"), "http://localhost:5000/api/folders");
    }

    #[test]
    fn test_create_body_shape() {
        let parent = FolderId::new();
        let body = serde_json::to_value(CreateFolderBody {
            name: "Docs",
            parent_id: Some(parent),
        })
        .unwrap();
        assert_eq!(body["name"], "Docs");
        assert_eq!(body["parentId"], parent.to_string());
    }
}
