//! Storage backend trait abstraction.

use async_trait::async_trait;
use unionboard_core::{Issue, IssueInput};

use crate::error::StorageError;

/// Issue collection operations.
///
/// Every method is a single store operation; nothing here spans a
/// transaction, so an update racing a delete resolves by interleaving.
#[async_trait]
pub trait IssueStore: Send + Sync {
    /// All issues ascending by `order`, ties in insertion order.
    async fn list_issues(&self) -> Result<Vec<Issue>, StorageError>;

    /// Appends a new issue with a generated id and the current timestamp.
    async fn create_issue(&self, input: IssueInput) -> Result<Issue, StorageError>;

    /// Overwrites content and order of an existing issue.
    ///
    /// Returns `StorageError::NotFound` for an unknown id; never inserts.
    async fn update_issue(&self, id: &str, input: IssueInput) -> Result<Issue, StorageError>;

    /// Permanently removes an issue. Unknown id yields `StorageError::NotFound`.
    async fn delete_issue(&self, id: &str) -> Result<(), StorageError>;
}
