//! Tab filtering and title deduplication for issue lists.
//!
//! The tab predicate runs first, then the optional keyword, then title
//! dedup over what survived. A title that only passes the filter on its
//! second occurrence is therefore still shown under that tab.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseTabError;
use crate::issue::IssueFields;

/// Display filter over issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    All,
    /// Issues with a company-side position.
    Company,
    /// Issues with a union-side position.
    Union,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::All, Self::Company, Self::Union];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Company => "company",
            Self::Union => "union",
        }
    }

    /// Whether `issue` belongs under this tab.
    pub fn matches<T: IssueFields + ?Sized>(self, issue: &T) -> bool {
        match self {
            Self::All => true,
            Self::Company => !issue.company().trim().is_empty(),
            Self::Union => !issue.union_position().trim().is_empty(),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "전체" => Ok(Self::All),
            "company" | "회사안" => Ok(Self::Company),
            "union" | "조합안" => Ok(Self::Union),
            _ => Err(ParseTabError(s.trim().to_owned())),
        }
    }
}

/// Records matching `tab`, in input order.
#[must_use]
pub fn filter_by_tab<T: IssueFields + Clone>(records: &[T], tab: Tab) -> Vec<T> {
    records.iter().filter(|r| tab.matches(*r)).cloned().collect()
}

/// Keeps the first record per title, in input order.
#[must_use]
pub fn dedup_by_title<T: IssueFields>(records: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    records.into_iter().filter(|r| seen.insert(r.title().to_owned())).collect()
}

fn matches_keyword<T: IssueFields>(record: &T, keyword: &str) -> bool {
    keyword.is_empty() || record.title().contains(keyword)
}

/// Result of selecting issues for a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabView<T> {
    /// Nothing to show; the UI must render an explicit "no issues" state.
    Empty,
    Issues(Vec<T>),
}

impl<T> TabView<T> {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Empty => Vec::new(),
            Self::Issues(items) => items,
        }
    }
}

/// Tab filter, then keyword narrowing on the title, then title dedup.
///
/// A blank keyword does not narrow anything.
#[must_use]
pub fn select<T: IssueFields + Clone>(records: &[T], tab: Tab, keyword: &str) -> TabView<T> {
    let keyword = keyword.trim();
    let filtered: Vec<T> = records
        .iter()
        .filter(|r| tab.matches(*r) && matches_keyword(*r, keyword))
        .cloned()
        .collect();
    let deduped = dedup_by_title(filtered);
    if deduped.is_empty() { TabView::Empty } else { TabView::Issues(deduped) }
}
