//! Issue list as it arrives over the wire.
//!
//! Sources disagree on the union field name (`union`, `union_opt`,
//! `union_position`) and may send `null` for any text field. Everything is
//! folded into [`IssueRecord`] here so nothing past this module sees the
//! variants.

use serde::{Deserialize, Deserializer};
use unionboard_core::IssueRecord;

#[derive(Debug, Deserialize)]
struct WireIssue {
    #[serde(default, deserialize_with = "id_text")]
    id: Option<String>,
    #[serde(default, deserialize_with = "text")]
    title: String,
    #[serde(default, deserialize_with = "text")]
    summary: String,
    #[serde(default, deserialize_with = "text")]
    company: String,
    #[serde(default, deserialize_with = "maybe_text")]
    union: Option<String>,
    #[serde(default, deserialize_with = "maybe_text")]
    union_opt: Option<String>,
    #[serde(default, deserialize_with = "maybe_text")]
    union_position: Option<String>,
}

impl From<WireIssue> for IssueRecord {
    fn from(wire: WireIssue) -> Self {
        // First alias carrying text wins; a blank one does not shadow the rest.
        let union_position = [wire.union, wire.union_opt, wire.union_position]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or_default();
        Self {
            id: wire.id,
            title: wire.title,
            summary: wire.summary,
            company: wire.company,
            union_position,
        }
    }
}

/// Decodes a `GET /issues` body into canonical records, keeping server order.
pub fn decode_issue_list(body: &str) -> Result<Vec<IssueRecord>, serde_json::Error> {
    let wire: Vec<WireIssue> = serde_json::from_str(body)?;
    Ok(wire.into_iter().map(IssueRecord::from).collect())
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn maybe_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Option::<String>::deserialize(deserializer)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn id_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}
