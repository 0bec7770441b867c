//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use unionboard_core::{Issue, IssueInput};

use crate::error::StorageError;
use crate::traits::IssueStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Memory(s) => <crate::MemoryStorage as IssueStore>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::PgStorage as IssueStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Memory(crate::MemoryStorage),
    #[cfg(feature = "postgres")]
    Postgres(crate::PgStorage),
}

impl StorageBackend {
    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(crate::MemoryStorage::new())
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::new(database_url).await?))
    }

    /// Short backend name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

#[async_trait]
impl IssueStore for StorageBackend {
    async fn list_issues(&self) -> Result<Vec<Issue>, StorageError> {
        dispatch!(self, list_issues())
    }

    async fn create_issue(&self, input: IssueInput) -> Result<Issue, StorageError> {
        dispatch!(self, create_issue(input))
    }

    async fn update_issue(&self, id: &str, input: IssueInput) -> Result<Issue, StorageError> {
        dispatch!(self, update_issue(id, input))
    }

    async fn delete_issue(&self, id: &str) -> Result<(), StorageError> {
        dispatch!(self, delete_issue(id))
    }
}
