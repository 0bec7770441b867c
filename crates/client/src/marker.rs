//! Local "last seen version" marker file.
//!
//! The file is a one-key JSON object. Either key name is read; writes use
//! the configured key and replace the whole file.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use unionboard_core::{MarkerField, VersionId};

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct LocalMarker {
    path: PathBuf,
    field: MarkerField,
}

impl LocalMarker {
    #[must_use]
    pub const fn new(path: PathBuf, field: MarkerField) -> Self {
        Self { path, field }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last acknowledged version, or `None` on first run.
    ///
    /// An unreadable or malformed file counts as absent, so the next check
    /// reports an update and the next acknowledgement rewrites it.
    pub async fn read(&self) -> Option<VersionId> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "marker unreadable, treating as absent");
                return None;
            },
        };
        match parse_marker(&raw, self.field) {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "marker corrupt, treating as absent");
                None
            },
        }
    }

    /// # Errors
    /// Returns an error if the directory or file cannot be written.
    pub async fn write(&self, version: &VersionId) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ClientError::Io { path: parent.to_path_buf(), source })?;
        }
        let mut object = Map::new();
        object.insert(self.field.key().to_owned(), Value::String(version.as_str().to_owned()));
        let body = serde_json::to_string(&Value::Object(object))
            .map_err(|source| ClientError::Json { path: self.path.clone(), source })?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|source| ClientError::Io { path: self.path.clone(), source })?;
        tracing::debug!(path = %self.path.display(), %version, "marker written");
        Ok(())
    }
}

/// The configured key wins when both are present.
fn parse_marker(raw: &str, field: MarkerField) -> Result<Option<VersionId>, serde_json::Error> {
    let object: Map<String, Value> = serde_json::from_str(raw)?;
    let other = match field {
        MarkerField::Version => MarkerField::LastSeenVersion,
        MarkerField::LastSeenVersion => MarkerField::Version,
    };
    let value = object.get(field.key()).or_else(|| object.get(other.key()));
    Ok(match value {
        Some(Value::String(s)) => Some(VersionId::new(s.clone())),
        Some(Value::Number(n)) => Some(VersionId::from(n)),
        _ => None,
    })
}
