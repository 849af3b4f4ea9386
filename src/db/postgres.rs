use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::RegisteredEmailAddress;

use super::{StoreError, SubmissionStore};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SubmissionStore for PgStore {
    async fn insert(
        &self,
        record: RegisteredEmailAddress,
    ) -> Result<RegisteredEmailAddress, StoreError> {
        let transaction_id = record
            .transaction_id
            .clone()
            .ok_or(StoreError::Incomplete("transaction_id"))?;

        sqlx::query_as::<_, RegisteredEmailAddress>(
            "INSERT INTO registered_email_addresses
                (id, transaction_id, registered_email_address,
                 accept_appropriate_email_address_statement, links, etag,
                 created_at, created_by_user_id, http_request_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&transaction_id)
        .bind(record.registered_email_address)
        .bind(record.accept_appropriate_email_address_statement)
        .bind(record.links)
        .bind(record.etag)
        .bind(record.created_at)
        .bind(record.created_by_user_id)
        .bind(record.http_request_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateTransaction(transaction_id.clone())
            }
            _ => StoreError::Database(e),
        })
    }

    async fn save(
        &self,
        record: RegisteredEmailAddress,
    ) -> Result<RegisteredEmailAddress, StoreError> {
        let id = record.id.ok_or(StoreError::Incomplete("id"))?;

        sqlx::query_as::<_, RegisteredEmailAddress>(
            "UPDATE registered_email_addresses
             SET transaction_id = $2, registered_email_address = $3,
                 accept_appropriate_email_address_statement = $4, links = $5,
                 etag = $6, created_at = $7, created_by_user_id = $8,
                 http_request_id = $9
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(record.transaction_id)
        .bind(record.registered_email_address)
        .bind(record.accept_appropriate_email_address_statement)
        .bind(record.links)
        .bind(record.etag)
        .bind(record.created_at)
        .bind(record.created_by_user_id)
        .bind(record.http_request_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Option<RegisteredEmailAddress>, StoreError> {
        let record = sqlx::query_as::<_, RegisteredEmailAddress>(
            "SELECT * FROM registered_email_addresses WHERE transaction_id = $1",
        )
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }
}
