//! # foldertree-core
//!
//! Core crate for FolderTree. Contains the configuration schema, typed
//! identifiers and the unified error system.
//!
//! This crate has **no** internal dependencies on other FolderTree crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
