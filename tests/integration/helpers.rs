//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use foldertree_api::{AppState, build_app};
use foldertree_core::config::{AppConfig, StoreBackend};
use foldertree_database::{FolderStore, MemoryFolderRepository};
use foldertree_service::FolderService;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store behind the router, for direct inspection
    pub store: Arc<MemoryFolderRepository>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.backend = StoreBackend::Memory;

        let store = Arc::new(MemoryFolderRepository::new());
        let service = FolderService::new(
            Arc::clone(&store) as Arc<dyn FolderStore>,
            config.folders.clone(),
        );
        let router = build_app(AppState::new(config.clone(), service));

        Self {
            router,
            store,
            config,
        }
    }

    /// Send a request with an optional JSON body
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }

    /// Fetch the folder list (creating the root on first call)
    pub async fn list(&self) -> Vec<Value> {
        let response = self.request("GET", "/api/folders", None).await;
        assert_eq!(response.status, StatusCode::OK);
        response.body.as_array().cloned().expect("folder list is an array")
    }

    /// Id of the root folder
    pub async fn root_id(&self) -> String {
        let folders = self.list().await;
        folders
            .iter()
            .find(|f| f["parentId"].is_null())
            .and_then(|f| f["id"].as_str())
            .expect("root folder exists")
            .to_string()
    }

    /// Create a folder and return its id
    pub async fn create(&self, name: &str, parent_id: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/folders",
                Some(json!({ "name": name, "parentId": parent_id })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
        response.body["id"]
            .as_str()
            .expect("created folder has an id")
            .to_string()
    }

    /// Delete a folder by id
    pub async fn delete(&self, id: &str) -> TestResponse {
        self.request("DELETE", &format!("/api/folders/{id}"), None).await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Parsed JSON body (`Null` when not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
}
