//! Client side of unionboard: issue fetching with an offline cache, and
//! the what's-new version tracker.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod api_client;
mod cache;
mod error;
mod marker;
mod tracker;
mod wire;

pub use api_client::{IssueApiClient, VersionClient};
pub use cache::{IssueCache, RefreshOutcome};
pub use error::ClientError;
pub use marker::LocalMarker;
pub use tracker::{SyncCheck, VersionTracker};
