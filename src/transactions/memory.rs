use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::models::{Resource, Transaction};

use super::{GatewayError, TransactionGateway};

/// Transactions held in process, for development runs and tests.
#[derive(Default)]
pub struct MemoryTransactionGateway {
    transactions: DashMap<String, Transaction>,
}

impl MemoryTransactionGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, transaction: Transaction) {
        self.transactions.insert(transaction.id.clone(), transaction);
    }

    pub fn get(&self, transaction_id: &str) -> Option<Transaction> {
        self.transactions.get(transaction_id).map(|t| t.value().clone())
    }
}

#[async_trait]
impl TransactionGateway for MemoryTransactionGateway {
    async fn get_transaction(
        &self,
        transaction_id: &str,
        _request_id: &str,
    ) -> Result<Transaction, GatewayError> {
        self.get(transaction_id)
            .ok_or_else(|| GatewayError::NotFound(transaction_id.to_string()))
    }

    async fn update_resources(
        &self,
        transaction: &Transaction,
        resources: HashMap<String, Resource>,
        _request_id: &str,
    ) -> Result<(), GatewayError> {
        let mut stored = self
            .transactions
            .get_mut(&transaction.id)
            .ok_or_else(|| GatewayError::NotFound(transaction.id.clone()))?;
        stored.resources = resources;
        Ok(())
    }
}
