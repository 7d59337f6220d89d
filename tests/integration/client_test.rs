//! End-to-end tests driving a live server through `FolderApiClient`.

mod helpers;

use foldertree_client::{FolderApiClient, FolderView, LoadState, render_tree};
use foldertree_core::config::ClientConfig;
use foldertree_core::error::ErrorKind;
use foldertree_core::types::FolderId;

/// Serve a fresh in-memory app on an ephemeral port and return a client for it.
async fn spawn_server() -> FolderApiClient {
    let app = helpers::TestApp::new();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, app.router).await.ok();
    });

    FolderApiClient::new(&ClientConfig {
        api_url: format!("http://{addr}"),
        timeout_seconds: 5,
    })
    .expect("Failed to build client")
}

#[tokio::test]
async fn test_view_loads_and_patches() {
    let client = spawn_server().await;

    let mut view = FolderView::new();
    view.load(&client).await;
    assert_eq!(view.state(), &LoadState::Ready);

    let root = view.index().root().cloned().expect("root folder");
    let docs = client
        .create_folder("Documents", Some(root.id))
        .await
        .unwrap();
    view.apply_created(docs.clone());

    assert_eq!(
        render_tree(&view),
        "▾ 📂 Root Folder\n    📁 Documents\n"
    );

    let message = client.delete_folder(docs.id).await.unwrap();
    assert_eq!(message, "Folder deleted successfully.");
    view.apply_deleted(docs.id);

    assert_eq!(view.folders().len(), 1);
    assert_eq!(client.list_folders().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_server_errors_carry_messages() {
    let client = spawn_server().await;
    let folders = client.list_folders().await.unwrap();
    let root = folders[0].id;

    let err = client.delete_folder(root).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
    assert!(!err.message.is_empty());

    let err = client.delete_folder(FolderId::new()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let err = client.create_folder("   ", Some(root)).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let parent = client.create_folder("Parent", Some(root)).await.unwrap();
    client.create_folder("Child", Some(parent.id)).await.unwrap();
    let err = client.delete_folder(parent.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_unreachable_server_fails_load() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = FolderApiClient::new(&ClientConfig {
        api_url: format!("http://{addr}"),
        timeout_seconds: 2,
    })
    .unwrap();

    let mut view = FolderView::new();
    view.load(&client).await;

    assert!(matches!(view.state(), LoadState::Failed(_)));
    assert!(render_tree(&view).starts_with("Failed to load folders:"));

    let err = client.list_folders().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExternalService);
}
