use std::sync::Arc;

use unionboard_core::{Issue, IssueInput};
use unionboard_storage::IssueStore;

use crate::ServiceError;

/// Issue CRUD over whichever store the server was started with.
///
/// Store failures are returned as-is; nothing is retried here.
pub struct IssueService {
    storage: Arc<dyn IssueStore>,
}

impl IssueService {
    #[must_use]
    pub fn new(storage: Arc<dyn IssueStore>) -> Self {
        Self { storage }
    }

    pub async fn list_issues(&self) -> Result<Vec<Issue>, ServiceError> {
        Ok(self.storage.list_issues().await?)
    }

    /// Creates an issue and returns its store-assigned id.
    pub async fn create_issue(&self, input: IssueInput) -> Result<String, ServiceError> {
        let issue = self.storage.create_issue(input).await?;
        tracing::info!(id = %issue.id, order = issue.order, "issue created");
        Ok(issue.id)
    }

    pub async fn update_issue(&self, id: &str, input: IssueInput) -> Result<Issue, ServiceError> {
        let issue = self.storage.update_issue(id, input).await?;
        tracing::info!(id, order = issue.order, "issue updated");
        Ok(issue)
    }

    pub async fn delete_issue(&self, id: &str) -> Result<(), ServiceError> {
        self.storage.delete_issue(id).await?;
        tracing::info!(id, "issue deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unionboard_storage::MemoryStorage;

    fn service() -> IssueService {
        IssueService::new(Arc::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn create_then_list_includes_new_issue() {
        let svc = service();
        let id = svc.create_issue(IssueInput::titled("Working hours").order(2)).await.unwrap();
        let issues = svc.list_issues().await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, id);
        assert_eq!(issues[0].order, 2);
    }

    #[tokio::test]
    async fn update_missing_reports_not_found() {
        let svc = service();
        let err = svc.update_issue("nope", IssueInput::titled("x")).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(!err.is_store_unavailable());
        assert!(svc.list_issues().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn second_delete_reports_not_found() {
        let svc = service();
        let id = svc.create_issue(IssueInput::titled("once")).await.unwrap();
        svc.delete_issue(&id).await.unwrap();
        assert!(svc.delete_issue(&id).await.unwrap_err().is_not_found());
    }
}
