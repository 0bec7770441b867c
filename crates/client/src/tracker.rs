//! What's-new tracker: remote descriptor against the local marker.

use unionboard_core::{evaluate, UpdateStatus, VersionDescriptor};

use crate::api_client::VersionClient;
use crate::marker::LocalMarker;

/// Outcome of one fetch-compare cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCheck {
    Checked { status: UpdateStatus, descriptor: VersionDescriptor },
    /// The descriptor could not be fetched; nothing was compared.
    Unavailable { reason: String },
}

impl SyncCheck {
    /// An unconfirmed check never reports an update.
    #[must_use]
    pub const fn status(&self) -> UpdateStatus {
        match self {
            Self::Checked { status, .. } => *status,
            Self::Unavailable { .. } => UpdateStatus::UpToDate,
        }
    }

    #[must_use]
    pub const fn descriptor(&self) -> Option<&VersionDescriptor> {
        match self {
            Self::Checked { descriptor, .. } => Some(descriptor),
            Self::Unavailable { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VersionTracker {
    client: VersionClient,
    marker: LocalMarker,
}

impl VersionTracker {
    #[must_use]
    pub const fn new(client: VersionClient, marker: LocalMarker) -> Self {
        Self { client, marker }
    }

    /// Fetches the descriptor once and compares it with the marker.
    /// The marker is never written here.
    pub async fn check(&self) -> SyncCheck {
        let descriptor = match self.client.fetch_descriptor().await {
            Ok(descriptor) => descriptor,
            Err(e) => {
                tracing::warn!(error = %e, "version check failed, reporting up-to-date");
                return SyncCheck::Unavailable { reason: e.to_string() };
            },
        };
        let marker = self.marker.read().await;
        let status = evaluate(marker.as_ref(), &descriptor.latest_version);
        tracing::info!(
            latest = %descriptor.latest_version,
            marker = marker.as_ref().map_or("<none>", |m| m.as_str()),
            status = status.as_str(),
            "version check complete"
        );
        SyncCheck::Checked { status, descriptor }
    }

    /// Records that the history for `descriptor` has been shown.
    ///
    /// # Errors
    /// Returns an error if the marker file cannot be written.
    pub async fn acknowledge(&self, descriptor: &VersionDescriptor) -> Result<(), crate::ClientError> {
        self.marker.write(&descriptor.latest_version).await?;
        tracing::info!(version = %descriptor.latest_version, "version acknowledged");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use unionboard_core::{MarkerField, VersionId};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve_latest(server: &MockServer, latest: serde_json::Value) {
        server.reset().await;
        Mock::given(method("GET"))
            .and(path("/meta/version"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latest_version": latest,
                "versions": []
            })))
            .mount(server)
            .await;
    }

    fn tracker(server: &MockServer, dir: &tempfile::TempDir) -> VersionTracker {
        let client = VersionClient::new(&format!("{}/meta/version", server.uri()), Duration::from_secs(2))
            .expect("client");
        let marker = LocalMarker::new(dir.path().join("local_version.json"), MarkerField::Version);
        VersionTracker::new(client, marker)
    }

    #[tokio::test]
    async fn first_run_flags_then_acknowledge_clears() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let tracker = tracker(&server, &dir);
        serve_latest(&server, serde_json::json!("3")).await;

        let first = tracker.check().await;
        assert_eq!(first.status(), UpdateStatus::UpdateAvailable);

        tracker.acknowledge(first.descriptor().expect("descriptor")).await.expect("ack");
        assert_eq!(tracker.check().await.status(), UpdateStatus::UpToDate);
    }

    #[tokio::test]
    async fn decimal_latest_version_round_trips_through_marker() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let tracker = tracker(&server, &dir);
        serve_latest(&server, serde_json::json!(1.5)).await;

        let first = tracker.check().await;
        assert!(matches!(first, SyncCheck::Checked { .. }));
        assert_eq!(first.status(), UpdateStatus::UpdateAvailable);

        tracker.acknowledge(first.descriptor().expect("descriptor")).await.expect("ack");
        assert_eq!(tracker.marker.read().await, Some(VersionId::from("1.5")));
        assert_eq!(tracker.check().await.status(), UpdateStatus::UpToDate);
    }

    #[tokio::test]
    async fn any_change_flags_including_rollback() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let tracker = tracker(&server, &dir);
        tracker.marker.write(&VersionId::from("5")).await.expect("seed");

        serve_latest(&server, serde_json::json!(5)).await;
        assert_eq!(tracker.check().await.status(), UpdateStatus::UpToDate);

        serve_latest(&server, serde_json::json!(4)).await;
        assert_eq!(tracker.check().await.status(), UpdateStatus::UpdateAvailable);
    }

    #[tokio::test]
    async fn fetch_failure_reports_up_to_date_and_keeps_marker() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let tracker = tracker(&server, &dir);
        tracker.marker.write(&VersionId::from("1")).await.expect("seed");
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let check = tracker.check().await;
        assert!(matches!(check, SyncCheck::Unavailable { .. }));
        assert_eq!(check.status(), UpdateStatus::UpToDate);
        assert_eq!(tracker.marker.read().await, Some(VersionId::from("1")));
    }

    #[tokio::test]
    async fn first_run_with_unreachable_remote_is_up_to_date() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let tracker = tracker(&server, &dir);
        drop(server);

        assert_eq!(tracker.check().await.status(), UpdateStatus::UpToDate);
        assert_eq!(tracker.marker.read().await, None);
    }
}
