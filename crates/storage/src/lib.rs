//! Storage layer for unionboard
//!
//! One async trait over the issue collection, an in-process backend and a
//! PostgreSQL backend, plus an enum that dispatches between them.

mod backend;
mod error;
mod memory;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
pub use traits::IssueStore;
