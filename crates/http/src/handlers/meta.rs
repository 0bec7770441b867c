use anyhow::Context as _;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use unionboard_core::VersionDescriptor;

use crate::api_error::ApiError;
use crate::AppState;

/// Publishes the configured version descriptor.
///
/// The file is re-read on every request so a new release note shows up
/// without restarting the server. No file configured means 404.
pub async fn version_descriptor(
    State(state): State<Arc<AppState>>,
) -> Result<Json<VersionDescriptor>, ApiError> {
    let Some(path) = state.version_file.as_ref() else {
        return Err(ApiError::NotFound);
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading version descriptor {}", path.display()))?;
    let descriptor: VersionDescriptor = serde_json::from_str(&raw)
        .with_context(|| format!("parsing version descriptor {}", path.display()))?;
    Ok(Json(descriptor))
}
