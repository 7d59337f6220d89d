//! # foldertree-entity
//!
//! Domain entity models for FolderTree. [`Folder`] is the only persisted
//! entity; with the `sqlx` feature it additionally derives `sqlx::FromRow`.
//!
//! The [`folder::tree`] module holds the pure tree derivation used by
//! clients to turn the flat folder list into an expandable hierarchy.

pub mod folder;

pub use folder::{CreateFolder, ExpandedSet, Folder, FolderIndex, TreeRow};
