//! In-process issue store.
//!
//! Issues live in a vector in insertion order behind a `tokio` lock. Used
//! for development runs without a database and throughout the tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use unionboard_core::{Issue, IssueInput};

use crate::error::StorageError;
use crate::traits::IssueStore;

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    issues: Arc<RwLock<Vec<Issue>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored issues, duplicates included.
    pub async fn len(&self) -> usize {
        self.issues.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.issues.read().await.is_empty()
    }
}

#[async_trait]
impl IssueStore for MemoryStorage {
    async fn list_issues(&self) -> Result<Vec<Issue>, StorageError> {
        let mut issues = self.issues.read().await.clone();
        // Stable sort keeps insertion order among equal ranks.
        issues.sort_by_key(|issue| issue.order);
        Ok(issues)
    }

    async fn create_issue(&self, input: IssueInput) -> Result<Issue, StorageError> {
        let issue = input.into_issue(uuid::Uuid::new_v4().to_string(), Utc::now());
        self.issues.write().await.push(issue.clone());
        tracing::debug!(id = %issue.id, order = issue.order, "issue created in memory store");
        Ok(issue)
    }

    async fn update_issue(&self, id: &str, input: IssueInput) -> Result<Issue, StorageError> {
        let mut issues = self.issues.write().await;
        let slot = issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or_else(|| StorageError::issue_not_found(id))?;
        *slot = input.into_issue(id.to_owned(), Utc::now());
        Ok(slot.clone())
    }

    async fn delete_issue(&self, id: &str) -> Result<(), StorageError> {
        let mut issues = self.issues.write().await;
        let position = issues
            .iter()
            .position(|issue| issue.id == id)
            .ok_or_else(|| StorageError::issue_not_found(id))?;
        issues.remove(position);
        Ok(())
    }
}
