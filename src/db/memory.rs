use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::RegisteredEmailAddress;

use super::{StoreError, SubmissionStore};

/// Process-local store for development runs and tests.
#[derive(Default)]
pub struct MemoryStore {
    records: DashMap<Uuid, RegisteredEmailAddress>,
    /// transaction_id -> record id
    by_transaction: DashMap<String, Uuid>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn count_for_transaction(&self, transaction_id: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.transaction_id.as_deref() == Some(transaction_id))
            .count()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn insert(
        &self,
        mut record: RegisteredEmailAddress,
    ) -> Result<RegisteredEmailAddress, StoreError> {
        let transaction_id = record
            .transaction_id
            .clone()
            .ok_or(StoreError::Incomplete("transaction_id"))?;

        // The index entry is the uniqueness check; hold it while the record lands.
        match self.by_transaction.entry(transaction_id) {
            Entry::Occupied(entry) => Err(StoreError::DuplicateTransaction(entry.key().clone())),
            Entry::Vacant(slot) => {
                let id = Uuid::now_v7();
                record.id = Some(id);
                self.records.insert(id, record.clone());
                slot.insert(id);
                Ok(record)
            }
        }
    }

    async fn save(
        &self,
        record: RegisteredEmailAddress,
    ) -> Result<RegisteredEmailAddress, StoreError> {
        let id = record.id.ok_or(StoreError::Incomplete("id"))?;
        match self.records.get_mut(&id) {
            Some(mut existing) => {
                *existing = record.clone();
                Ok(record)
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Option<RegisteredEmailAddress>, StoreError> {
        let Some(id) = self.by_transaction.get(transaction_id).map(|e| *e.value()) else {
            return Ok(None);
        };
        Ok(self.records.get(&id).map(|r| r.value().clone()))
    }
}
