//! Typed error enum for the service layer.

use unionboard_storage::StorageError;
use thiserror::Error;

/// Service-layer error wrapping storage failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (store unreachable, missing record, bad row).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Whether the target record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }

    /// Whether the store could not serve the request at all.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_unavailable())
    }
}
