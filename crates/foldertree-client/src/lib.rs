//! # foldertree-client
//!
//! Client side of FolderTree: a typed HTTP client for the folder API, the
//! view state that turns the fetched list into an expandable tree, and a
//! plain-text renderer for terminals.

pub mod api;
pub mod render;
pub mod view;

pub use api::FolderApiClient;
pub use render::{render_row, render_tree};
pub use view::{FolderView, LoadState};
