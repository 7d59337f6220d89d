//! Request and response bodies.

pub mod request;
pub mod response;

pub use request::CreateFolderRequest;
pub use response::{ApiResponse, HealthResponse, MessageResponse};
