//! Response types (Serialize)

use serde::Serialize;
use unionboard_core::Issue;

/// Wire shape of an issue in `GET /issues`.
///
/// The union position goes out as `union`; internally it is `union_position`.
#[derive(Debug, Serialize)]
pub struct IssueResponse {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub company: String,
    #[serde(rename = "union")]
    pub union_position: String,
}

impl From<Issue> for IssueResponse {
    fn from(issue: Issue) -> Self {
        Self {
            id: issue.id,
            title: issue.title,
            summary: issue.summary,
            company: issue.company,
            union_position: issue.union_position,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub status: &'static str,
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub result: &'static str,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
