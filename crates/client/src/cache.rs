//! Last-known-good issue list for one client session.

use std::path::{Path, PathBuf};

use unionboard_core::{select, IssueRecord, Tab, TabView};

use crate::api_client::IssueApiClient;
use crate::error::ClientError;

/// What a refresh did to the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The list was replaced by `count` freshly fetched issues.
    Fresh { count: usize },
    /// The fetch failed; the `cached` previous issues are still served.
    Stale { reason: String, cached: usize },
}

impl RefreshOutcome {
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh { .. })
    }
}

/// Session-owned issue list with an optional on-disk snapshot.
///
/// Refreshing needs `&mut self`, so a session cannot interleave two
/// refreshes and have an older response overwrite a newer one.
#[derive(Debug, Default)]
pub struct IssueCache {
    records: Vec<IssueRecord>,
    snapshot_path: Option<PathBuf>,
}

impl IssueCache {
    #[must_use]
    pub const fn new(snapshot_path: Option<PathBuf>) -> Self {
        Self { records: Vec::new(), snapshot_path }
    }

    /// Starts from the snapshot when one is configured and readable.
    pub async fn load(snapshot_path: Option<PathBuf>) -> Self {
        let mut cache = Self::new(snapshot_path);
        if let Some(path) = cache.snapshot_path.as_deref() {
            match read_snapshot(path).await {
                Ok(Some(records)) => {
                    tracing::debug!(count = records.len(), path = %path.display(), "snapshot loaded");
                    cache.records = records;
                },
                Ok(None) => {},
                Err(e) => tracing::warn!(error = %e, "ignoring unreadable snapshot"),
            }
        }
        cache
    }

    #[must_use]
    pub fn records(&self) -> &[IssueRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One fetch; on failure the current list is kept untouched.
    pub async fn refresh(&mut self, client: &IssueApiClient) -> RefreshOutcome {
        match client.fetch_issues().await {
            Ok(records) => {
                self.records = records;
                if let Err(e) = self.save_snapshot().await {
                    tracing::warn!(error = %e, "could not persist issue snapshot");
                }
                RefreshOutcome::Fresh { count: self.records.len() }
            },
            Err(e) => {
                tracing::warn!(error = %e, cached = self.records.len(), "issue refresh failed, serving cached list");
                RefreshOutcome::Stale { reason: e.to_string(), cached: self.records.len() }
            },
        }
    }

    /// Tab filter, keyword and title dedup over the cached list.
    #[must_use]
    pub fn view(&self, tab: Tab, keyword: &str) -> TabView<IssueRecord> {
        select(&self.records, tab, keyword)
    }

    async fn save_snapshot(&self) -> Result<(), ClientError> {
        let Some(path) = self.snapshot_path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ClientError::Io { path: parent.to_path_buf(), source })?;
        }
        let body = serde_json::to_vec(&self.records)
            .map_err(|source| ClientError::Json { path: path.to_path_buf(), source })?;
        tokio::fs::write(path, body)
            .await
            .map_err(|source| ClientError::Io { path: path.to_path_buf(), source })
    }
}

async fn read_snapshot(path: &Path) -> Result<Option<Vec<IssueRecord>>, ClientError> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ClientError::Io { path: path.to_path_buf(), source }),
    };
    serde_json::from_slice(&raw)
        .map(Some)
        .map_err(|source| ClientError::Json { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_issues(server: &MockServer, body: serde_json::Value) {
        server.reset().await;
        Mock::given(method("GET"))
            .and(path("/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    fn client(server: &MockServer) -> IssueApiClient {
        IssueApiClient::new(&server.uri(), Duration::from_secs(2)).expect("client")
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_list() {
        let server = MockServer::start().await;
        let mut cache = IssueCache::new(None);
        mount_issues(&server, serde_json::json!([{"title": "A", "company": "x"}])).await;
        assert_eq!(cache.refresh(&client(&server)).await, RefreshOutcome::Fresh { count: 1 });

        server.reset().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let outcome = cache.refresh(&client(&server)).await;
        assert!(matches!(outcome, RefreshOutcome::Stale { cached: 1, .. }));
        assert_eq!(cache.records()[0].title, "A");
    }

    #[tokio::test]
    async fn view_runs_the_filter_engine() {
        let server = MockServer::start().await;
        let mut cache = IssueCache::new(None);
        mount_issues(
            &server,
            serde_json::json!([
                {"title": "A", "company": "x", "union": ""},
                {"title": "A", "company": "y", "union": ""},
                {"title": "B", "company": "", "union_opt": "z"}
            ]),
        )
        .await;
        cache.refresh(&client(&server)).await;

        let company = cache.view(Tab::Company, "").into_vec();
        assert_eq!(company.len(), 1);
        assert_eq!(company[0].company, "x");
        assert!(cache.view(Tab::Union, "A").is_empty());
        assert_eq!(cache.view(Tab::All, "").into_vec().len(), 2);
    }

    #[tokio::test]
    async fn snapshot_survives_a_new_session() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let snapshot = dir.path().join("cache").join("issues.json");
        mount_issues(&server, serde_json::json!([{"id": "1", "title": "Wages", "union": "5%"}])).await;

        let mut cache = IssueCache::load(Some(snapshot.clone())).await;
        assert!(cache.is_empty());
        cache.refresh(&client(&server)).await;

        let reopened = IssueCache::load(Some(snapshot)).await;
        assert_eq!(reopened.records(), cache.records());
        assert_eq!(reopened.records()[0].union_position, "5%");
    }

    #[tokio::test]
    async fn corrupt_snapshot_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let snapshot = dir.path().join("issues.json");
        tokio::fs::write(&snapshot, "not json").await.expect("write");

        let cache = IssueCache::load(Some(snapshot)).await;
        assert!(cache.is_empty());
        assert!(cache.view(Tab::All, "").is_empty());
    }
}
