pub mod api;
pub mod extractor;
pub mod memory;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::models::{Resource, Transaction};

pub use api::TransactionsApiClient;
pub use extractor::TransactionContext;
pub use memory::MemoryTransactionGateway;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("transaction {0} not found")]
    NotFound(String),
    #[error("transactions api returned {status} for transaction {transaction_id}")]
    Status { transaction_id: String, status: u16 },
    #[error("invalid transactions api url: {0}")]
    InvalidBaseUrl(String),
    #[error("transactions api request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Access to the external transactions service.
///
/// Resource updates are a read-modify-write cycle: callers read the current
/// map with [`read_resources`](Self::read_resources), change it, and write the
/// whole map back.
#[async_trait]
pub trait TransactionGateway: Send + Sync {
    async fn get_transaction(
        &self,
        transaction_id: &str,
        request_id: &str,
    ) -> Result<Transaction, GatewayError>;

    async fn read_resources(
        &self,
        transaction: &Transaction,
        request_id: &str,
    ) -> Result<HashMap<String, Resource>, GatewayError> {
        Ok(self
            .get_transaction(&transaction.id, request_id)
            .await?
            .resources)
    }

    async fn update_resources(
        &self,
        transaction: &Transaction,
        resources: HashMap<String, Resource>,
        request_id: &str,
    ) -> Result<(), GatewayError>;
}
