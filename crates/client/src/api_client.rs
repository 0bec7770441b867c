//! HTTP clients for the issue list and the version descriptor.

use std::time::Duration;

use unionboard_core::{IssueRecord, VersionDescriptor};

use crate::error::ClientError;
use crate::wire::decode_issue_list;

/// Maximum body excerpt carried into decode errors.
const ERROR_EXCERPT_LEN: usize = 200;

fn build_http(timeout: Duration) -> Result<reqwest::Client, ClientError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// One bounded GET; any non-2xx status is an error.
async fn get_body(http: &reqwest::Client, url: &str) -> Result<String, ClientError> {
    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status { code: status.as_u16(), url: url.to_owned() });
    }
    Ok(response.text().await?)
}

fn excerpt(body: &str) -> &str {
    if body.len() <= ERROR_EXCERPT_LEN {
        return body;
    }
    let mut end = ERROR_EXCERPT_LEN;
    while end > 0 && !body.is_char_boundary(end) {
        end = end.saturating_sub(1);
    }
    body.get(..end).unwrap_or("")
}

/// Reads the issue list from the issue API.
#[derive(Debug, Clone)]
pub struct IssueApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl IssueApiClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self { http: build_http(timeout)?, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/issues`, normalized to canonical records in server order.
    ///
    /// # Errors
    /// Transport failure, timeout, non-2xx status or an undecodable body.
    pub async fn fetch_issues(&self) -> Result<Vec<IssueRecord>, ClientError> {
        let url = format!("{}/issues", self.base_url);
        let body = get_body(&self.http, &url).await?;
        let records = decode_issue_list(&body).map_err(|source| ClientError::Decode {
            context: format!("issue list (body: {})", excerpt(&body)),
            source,
        })?;
        tracing::debug!(count = records.len(), %url, "fetched issue list");
        Ok(records)
    }
}

/// Reads the remote version descriptor.
#[derive(Debug, Clone)]
pub struct VersionClient {
    http: reqwest::Client,
    url: String,
}

impl VersionClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self { http: build_http(timeout)?, url: url.to_owned() })
    }

    /// # Errors
    /// Transport failure, timeout, non-2xx status or an undecodable body.
    pub async fn fetch_descriptor(&self) -> Result<VersionDescriptor, ClientError> {
        let body = get_body(&self.http, &self.url).await?;
        let descriptor: VersionDescriptor =
            serde_json::from_str(&body).map_err(|source| ClientError::Decode {
                context: format!("version descriptor (body: {})", excerpt(&body)),
                source,
            })?;
        tracing::debug!(latest = %descriptor.latest_version, "fetched version descriptor");
        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMEOUT: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn fetch_issues_normalizes_the_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "1", "title": "Wages", "summary": "s", "company": "2%", "union": "5%"},
                {"id": "2", "title": "Hours", "summary": null, "company": "", "union_opt": "35h"}
            ])))
            .mount(&server)
            .await;

        let client = IssueApiClient::new(&format!("{}/", server.uri()), TIMEOUT).expect("client");
        let issues = client.fetch_issues().await.expect("fetch");
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].union_position, "5%");
        assert_eq!(issues[1].union_position, "35h");
        assert_eq!(issues[1].summary, "");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/issues"))
            .respond_with(ResponseTemplate::new(503).set_body_json(
                serde_json::json!({"error": "store unavailable"}),
            ))
            .mount(&server)
            .await;

        let client = IssueApiClient::new(&server.uri(), TIMEOUT).expect("client");
        let err = client.fetch_issues().await.unwrap_err();
        assert!(matches!(err, ClientError::Status { code: 503, .. }));
        assert!(err.is_remote());
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/issues"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([]))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client =
            IssueApiClient::new(&server.uri(), Duration::from_millis(100)).expect("client");
        let err = client.fetch_issues().await.unwrap_err();
        assert!(matches!(err, ClientError::Request(ref e) if e.is_timeout()));
    }

    #[tokio::test]
    async fn garbage_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server)
            .await;

        let client = IssueApiClient::new(&server.uri(), TIMEOUT).expect("client");
        let err = client.fetch_issues().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
    }

    #[tokio::test]
    async fn descriptor_accepts_numeric_versions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/meta/version"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latest_version": 7,
                "versions": [{"version": 7, "title": "Round 7", "items": ["bonus"]}]
            })))
            .mount(&server)
            .await;

        let client =
            VersionClient::new(&format!("{}/meta/version", server.uri()), TIMEOUT).expect("client");
        let descriptor = client.fetch_descriptor().await.expect("fetch");
        assert_eq!(descriptor.latest_version.as_str(), "7");
        assert_eq!(descriptor.versions.len(), 1);
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        let body = "가".repeat(100);
        let cut = excerpt(&body);
        assert!(cut.len() <= ERROR_EXCERPT_LEN);
        assert!(body.starts_with(cut));
    }
}
