//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::MessageRecord;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("integrity error: {message}")]
    Integrity { message: String },
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Persistence operations for messages. Reads are read-only; `insert` assigns
/// the id and creation timestamp in the store.
#[async_trait]
pub trait MessagesRepo: Send + Sync {
    async fn find_all(&self) -> Result<Vec<MessageRecord>, RepoError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<MessageRecord>, RepoError>;

    async fn insert(&self, content: &str) -> Result<MessageRecord, RepoError>;
}
