//! Version descriptor types and the update-availability rule.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque content version identifier.
///
/// Descriptors in the wild carry either strings or integers; both are
/// normalized to text so that `3` and `"3"` name the same version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionId(String);

impl VersionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VersionId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<&serde_json::Number> for VersionId {
    fn from(n: &serde_json::Number) -> Self {
        Self(n.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVersionId {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for VersionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawVersionId::deserialize(deserializer)? {
            RawVersionId::Text(s) => Self(s),
            RawVersionId::Number(n) => Self::from(&n),
        })
    }
}

/// One published changelog entry. Immutable once published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub version: VersionId,
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Remote description of the latest content revision and its history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDescriptor {
    pub latest_version: VersionId,
    #[serde(default)]
    pub versions: Vec<VersionEntry>,
}

impl VersionDescriptor {
    /// Changelog entry for `latest_version`, if published.
    #[must_use]
    pub fn latest_entry(&self) -> Option<&VersionEntry> {
        self.versions.iter().find(|v| v.version == self.latest_version)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    UpToDate,
    UpdateAvailable,
}

impl UpdateStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpToDate => "up-to-date",
            Self::UpdateAvailable => "update-available",
        }
    }
}

/// Decides availability from the local marker and the remote latest version.
///
/// No marker means first launch and always reports an update. Otherwise any
/// difference counts, including a remote rollback: identifiers are compared
/// for equality only, never ordered.
#[must_use]
pub fn evaluate(marker: Option<&VersionId>, latest: &VersionId) -> UpdateStatus {
    match marker {
        None => UpdateStatus::UpdateAvailable,
        Some(seen) if seen == latest => UpdateStatus::UpToDate,
        Some(_) => UpdateStatus::UpdateAvailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_marker_flags_update() {
        assert_eq!(evaluate(None, &VersionId::from("1")), UpdateStatus::UpdateAvailable);
    }

    #[test]
    fn equal_marker_is_up_to_date() {
        assert_eq!(
            evaluate(Some(&VersionId::from("1.2")), &VersionId::from("1.2")),
            UpdateStatus::UpToDate
        );
    }

    #[test]
    fn any_difference_flags_update_even_rollback() {
        assert_eq!(
            evaluate(Some(&VersionId::from("5")), &VersionId::from("4")),
            UpdateStatus::UpdateAvailable
        );
    }

    #[test]
    fn numeric_and_string_ids_normalize_to_text() {
        let descriptor: VersionDescriptor = serde_json::from_value(serde_json::json!({
            "latest_version": 3,
            "versions": [
                {"version": "3", "title": "Wage update", "items": ["round 3 summary"]},
                {"version": 2, "title": "Initial", "note": "first publish"}
            ]
        }))
        .expect("descriptor");
        assert_eq!(descriptor.latest_version, VersionId::from("3"));
        assert_eq!(descriptor.latest_entry().map(|e| e.title.as_str()), Some("Wage update"));
        assert_eq!(descriptor.versions[1].note.as_deref(), Some("first publish"));
        assert!(descriptor.versions[1].items.is_empty());
    }

    #[test]
    fn decimal_versions_decode_as_text() {
        let descriptor: VersionDescriptor = serde_json::from_value(serde_json::json!({
            "latest_version": 1.5,
            "versions": [{"version": 1.5, "title": "Mid-round", "items": []}]
        }))
        .expect("descriptor");
        assert_eq!(descriptor.latest_version, VersionId::from("1.5"));
        assert!(descriptor.latest_entry().is_some());
        assert_eq!(
            evaluate(Some(&VersionId::from("1.5")), &descriptor.latest_version),
            UpdateStatus::UpToDate
        );
    }

    #[test]
    fn version_id_serializes_as_string() {
        let json = serde_json::to_value(VersionId::from("7")).expect("serialize");
        assert_eq!(json, serde_json::json!("7"));
    }
}
