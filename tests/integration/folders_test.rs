//! Integration tests for the folder endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_list_creates_root_on_first_call() {
    let app = helpers::TestApp::new();

    let folders = app.list().await;
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["name"], "Root Folder");
    assert!(folders[0]["parentId"].is_null());
    assert!(folders[0]["createdAt"].is_string());

    let again = app.list().await;
    assert_eq!(again.len(), 1);
    assert_eq!(again[0]["id"], folders[0]["id"]);
}

#[tokio::test]
async fn test_create_child_returns_201_with_record() {
    let app = helpers::TestApp::new();
    let root = app.root_id().await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "  Documents  ", "parentId": root })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "Documents");
    assert_eq!(response.body["parentId"], root.as_str());
    assert_eq!(app.list().await.len(), 2);
}

#[tokio::test]
async fn test_create_requires_name() {
    let app = helpers::TestApp::new();
    let root = app.root_id().await;

    for body in [
        json!({ "parentId": root }),
        json!({ "name": "", "parentId": root }),
        json!({ "name": "   ", "parentId": root }),
    ] {
        let response = app.request("POST", "/api/folders", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
        assert!(response.body["message"].is_string());
    }

    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_create_rejects_overlong_name() {
    let app = helpers::TestApp::new();
    let root = app.root_id().await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "x".repeat(256), "parentId": root })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_create_with_malformed_body() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/api/folders", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_with_unknown_parent() {
    let app = helpers::TestApp::new();
    app.root_id().await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "Orphan", "parentId": "00000000-0000-0000-0000-000000000001" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_create_with_invalid_parent_id() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "Docs", "parentId": "not-a-uuid" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_second_root_is_rejected() {
    let app = helpers::TestApp::new();
    app.root_id().await;

    for parent in [json!(null), json!("")] {
        let response = app
            .request(
                "POST",
                "/api/folders",
                Some(json!({ "name": "Another root", "parentId": parent })),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "CONFLICT");
    }

    let roots = app
        .list()
        .await
        .into_iter()
        .filter(|f| f["parentId"].is_null())
        .count();
    assert_eq!(roots, 1);
}

#[tokio::test]
async fn test_create_root_on_empty_store() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": "Home" })))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["parentId"].is_null());

    let folders = app.list().await;
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["name"], "Home");
}

#[tokio::test]
async fn test_delete_scenario() {
    let app = helpers::TestApp::new();
    let root = app.root_id().await;
    let a = app.create("A", &root).await;
    let b = app.create("B", &a).await;

    let response = app.delete(&root).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");

    let response = app.delete(&a).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.len().await, 3);

    let response = app.delete(&b).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Folder deleted successfully.");

    let response = app.delete(&a).await;
    assert_eq!(response.status, StatusCode::OK);

    let folders = app.list().await;
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["id"], root.as_str());
}

#[tokio::test]
async fn test_delete_unknown_folder() {
    let app = helpers::TestApp::new();
    app.root_id().await;

    let response = app.delete("00000000-0000-0000-0000-999999999999").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");

    let response = app.delete("abc").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_list_preserves_creation_order() {
    let app = helpers::TestApp::new();
    let root = app.root_id().await;
    let names = ["Pictures", "Documents", "Music"];
    for name in names {
        app.create(name, &root).await;
    }

    let listed: Vec<_> = app
        .list()
        .await
        .iter()
        .skip(1)
        .map(|f| f["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(listed, names);
}
