//! Typed error enum for the client crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from remote fetches and local client files.
///
/// None of these reach presentation: callers fall back to the cached list
/// or to "up to date".
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP status {code} from {url}")]
    Status { code: u16, url: String },
    #[error("could not decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Whether the failure came from the network side rather than local files.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { .. } | Self::Decode { .. })
    }
}
