use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored negotiation issue.
///
/// `id` is the primary key; `title` is the display identity the client
/// deduplicates on. Several stored issues may share a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Company-side position, may be empty.
    pub company: String,
    /// Union-side position, may be empty.
    pub union_position: String,
    /// Display rank. Not unique, not contiguous.
    pub order: i64,
    pub updated_at: DateTime<Utc>,
}

/// Content of an issue as written by create/update.
///
/// Updates always carry the full record; there is no partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueInput {
    pub title: String,
    pub summary: String,
    pub company: String,
    pub union_position: String,
    pub order: i64,
}

impl IssueInput {
    /// Input with only a title; every other field takes its default.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    #[must_use]
    pub fn union_position(mut self, union_position: impl Into<String>) -> Self {
        self.union_position = union_position.into();
        self
    }

    #[must_use]
    pub const fn order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Materializes a stored issue from this input.
    #[must_use]
    pub fn into_issue(self, id: String, updated_at: DateTime<Utc>) -> Issue {
        Issue {
            id,
            title: self.title,
            summary: self.summary,
            company: self.company,
            union_position: self.union_position,
            order: self.order,
            updated_at,
        }
    }
}

/// Client-side canonical issue: the title/summary/company/union tuple
/// plus the store id when the source provided one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub summary: String,
    pub company: String,
    pub union_position: String,
}

impl IssueRecord {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        company: impl Into<String>,
        union_position: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            summary: summary.into(),
            company: company.into(),
            union_position: union_position.into(),
        }
    }
}

impl From<Issue> for IssueRecord {
    fn from(issue: Issue) -> Self {
        Self {
            id: Some(issue.id),
            title: issue.title,
            summary: issue.summary,
            company: issue.company,
            union_position: issue.union_position,
        }
    }
}

/// Fields the filter engine looks at.
pub trait IssueFields {
    fn title(&self) -> &str;
    fn company(&self) -> &str;
    fn union_position(&self) -> &str;
}

impl IssueFields for Issue {
    fn title(&self) -> &str {
        &self.title
    }

    fn company(&self) -> &str {
        &self.company
    }

    fn union_position(&self) -> &str {
        &self.union_position
    }
}

impl IssueFields for IssueRecord {
    fn title(&self) -> &str {
        &self.title
    }

    fn company(&self) -> &str {
        &self.company
    }

    fn union_position(&self) -> &str {
        &self.union_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titled_input_defaults_everything_else() {
        let input = IssueInput::titled("Wage round 3");
        assert_eq!(input.title, "Wage round 3");
        assert!(input.summary.is_empty());
        assert!(input.company.is_empty());
        assert!(input.union_position.is_empty());
        assert_eq!(input.order, 0);
    }

    #[test]
    fn record_from_issue_keeps_id_and_drops_order() {
        let issue = IssueInput::titled("Retirement age")
            .company("needs discussion")
            .union_position("63")
            .order(4)
            .into_issue("abc".to_owned(), Utc::now());
        let record = IssueRecord::from(issue);
        assert_eq!(record.id.as_deref(), Some("abc"));
        assert_eq!(record.company, "needs discussion");
        assert_eq!(record.union_position, "63");
    }
}
