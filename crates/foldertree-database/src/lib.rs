//! # foldertree-database
//!
//! Persistence for FolderTree: the [`FolderStore`] trait the service layer
//! is written against, a PostgreSQL implementation, an in-memory
//! implementation, connection pool management and migrations.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::{FolderRepository, MemoryFolderRepository};
pub use store::{FolderStore, open_store};
