//! # foldertree-api
//!
//! HTTP API layer for FolderTree built on Axum.
//!
//! Maps the REST endpoints onto [`foldertree_service::FolderService`],
//! applies CORS and request logging, and converts every
//! [`foldertree_core::AppError`] into a JSON error body with the matching
//! status code.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use logging::init_logging;
pub use state::AppState;
