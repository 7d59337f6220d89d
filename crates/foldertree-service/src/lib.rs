//! # foldertree-service
//!
//! Business logic for FolderTree. [`FolderService`] is the only writer of
//! the folder store and is responsible for keeping the hierarchy valid:
//! one root, no deleting the root, no deleting folders that still have
//! children.
//!
//! The store is injected at construction time as an `Arc<dyn FolderStore>`.

pub mod folder;

pub use folder::{FolderService, StoreHealth};
