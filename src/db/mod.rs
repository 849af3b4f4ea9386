pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::RegisteredEmailAddress;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("a registered email address already exists for transaction {0}")]
    DuplicateTransaction(String),
    #[error("registered email address {0} not found")]
    NotFound(String),
    #[error("registered email address record has no {0}")]
    Incomplete(&'static str),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence for submissions, keyed by id with a unique secondary key on
/// the owning transaction.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Stores a new record and returns it with its assigned `id`.
    ///
    /// Fails with [`StoreError::DuplicateTransaction`] when the transaction
    /// already owns a record.
    async fn insert(
        &self,
        record: RegisteredEmailAddress,
    ) -> Result<RegisteredEmailAddress, StoreError>;

    /// Overwrites the record with the same `id`.
    async fn save(
        &self,
        record: RegisteredEmailAddress,
    ) -> Result<RegisteredEmailAddress, StoreError>;

    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Option<RegisteredEmailAddress>, StoreError>;
}
