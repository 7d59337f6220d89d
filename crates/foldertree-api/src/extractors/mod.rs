//! Custom Axum extractors.

pub mod json;
pub mod path;

pub use json::JsonBody;
pub use path::parse_folder_id;
