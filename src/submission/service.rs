use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use sqlx::types::Json;

use crate::db::{StoreError, SubmissionStore};
use crate::error::ServiceError;
use crate::models::{
    Filing, FilingData, RegisteredEmailAddress, RegisteredEmailAddressDto, Resource, Transaction,
    ValidationStatus,
};
use crate::transactions::TransactionGateway;

use super::{
    mapper, submission_uri, validation, FILING_DESCRIPTION, FILING_KIND, LINK_RESOURCE, LINK_SELF,
    LINK_VALIDATION_STATUS, VALIDATION_STATUS_URI_SUFFIX,
};

pub struct RegisteredEmailAddressService {
    store: Arc<dyn SubmissionStore>,
    transactions: Arc<dyn TransactionGateway>,
}

impl RegisteredEmailAddressService {
    pub fn new(store: Arc<dyn SubmissionStore>, transactions: Arc<dyn TransactionGateway>) -> Self {
        Self {
            store,
            transactions,
        }
    }

    /// Creates the transaction's registered email address submission and
    /// links it onto the transaction.
    ///
    /// `dto` must already have passed [`validation::validate_input`].
    pub async fn create_submission(
        &self,
        transaction: &Transaction,
        dto: &RegisteredEmailAddressDto,
        request_id: &str,
        user_id: &str,
    ) -> Result<RegisteredEmailAddressDto, ServiceError> {
        tracing::debug!(request_id, "create_submission for transaction {}", transaction.id);

        if transaction.has_resource_of_kind(FILING_KIND) {
            return Err(ServiceError::DuplicateSubmission(transaction.id.clone()));
        }

        let mut record = mapper::to_record(dto);
        record.transaction_id = Some(transaction.id.clone());
        record.etag = Some(super::etag::generate());

        tracing::debug!(request_id, "Inserting registered email address");
        let created = self.store.insert(record).await.map_err(|e| match e {
            StoreError::DuplicateTransaction(id) => ServiceError::DuplicateSubmission(id),
            other => ServiceError::Store(other),
        })?;

        let submission_id = created.id.ok_or(StoreError::Incomplete("id"))?;
        let uri = submission_uri(&transaction.id, &submission_id.to_string());

        let saved = self
            .stamp_metadata(created, &uri, request_id, user_id)
            .await?;

        self.link_transaction(transaction, &uri, request_id).await?;

        tracing::info!(
            request_id,
            "Registered email address submission {submission_id} created for transaction {} (company {})",
            transaction.id,
            transaction.company_number.as_deref().unwrap_or("unknown")
        );

        Ok(mapper::to_response(&saved))
    }

    /// Any lookup failure, not only a miss, is reported as
    /// [`ServiceError::SubmissionNotFound`].
    pub async fn get_validation_status(
        &self,
        transaction_id: &str,
        request_id: &str,
    ) -> Result<ValidationStatus, ServiceError> {
        match self.store.find_by_transaction_id(transaction_id).await {
            Ok(Some(record)) => Ok(validation::validate(&record)),
            Ok(None) => {
                let err = ServiceError::SubmissionNotFound(transaction_id.to_string());
                tracing::error!(request_id, "{err}");
                Err(err)
            }
            Err(e) => {
                let err = ServiceError::SubmissionNotFound(transaction_id.to_string());
                tracing::error!(request_id, "{err}: {e}");
                Err(err)
            }
        }
    }

    pub async fn get_submission(
        &self,
        transaction_id: &str,
        request_id: &str,
    ) -> Result<RegisteredEmailAddressDto, ServiceError> {
        let record = self.find(transaction_id).await?;
        tracing::debug!(request_id, "Registered email address found for transaction {transaction_id}");
        Ok(mapper::to_response(&record))
    }

    /// Filing data for a closed transaction.
    pub async fn get_filings(
        &self,
        transaction: &Transaction,
        request_id: &str,
    ) -> Result<Vec<Filing>, ServiceError> {
        if !transaction.is_closed() {
            return Err(ServiceError::TransactionNotClosed(transaction.id.clone()));
        }

        let record = self.find(&transaction.id).await?;
        tracing::info!(request_id, "Returning filing for transaction {}", transaction.id);

        Ok(vec![Filing {
            kind: FILING_KIND.to_string(),
            description: FILING_DESCRIPTION.to_string(),
            data: FilingData {
                registered_email_address: record.registered_email_address,
                accept_appropriate_email_address_statement: record
                    .accept_appropriate_email_address_statement,
            },
        }])
    }

    async fn find(&self, transaction_id: &str) -> Result<RegisteredEmailAddress, ServiceError> {
        self.store
            .find_by_transaction_id(transaction_id)
            .await?
            .ok_or_else(|| ServiceError::SubmissionNotFound(transaction_id.to_string()))
    }

    async fn stamp_metadata(
        &self,
        mut record: RegisteredEmailAddress,
        uri: &str,
        request_id: &str,
        user_id: &str,
    ) -> Result<RegisteredEmailAddress, ServiceError> {
        record.links = Some(Json(HashMap::from([(
            LINK_SELF.to_string(),
            uri.to_string(),
        )])));
        record.created_at = Some(Utc::now());
        record.http_request_id = Some(request_id.to_string());
        record.created_by_user_id = Some(user_id.to_string());

        Ok(self.store.save(record).await?)
    }

    /// Adds the submission's resource entry to the transaction, keeping the
    /// resources already linked there.
    async fn link_transaction(
        &self,
        transaction: &Transaction,
        uri: &str,
        request_id: &str,
    ) -> Result<(), ServiceError> {
        let resource = Resource {
            kind: FILING_KIND.to_string(),
            links: HashMap::from([
                (LINK_RESOURCE.to_string(), uri.to_string()),
                (
                    LINK_VALIDATION_STATUS.to_string(),
                    format!("{uri}{VALIDATION_STATUS_URI_SUFFIX}"),
                ),
            ]),
        };

        let mut resources = self
            .transactions
            .read_resources(transaction, request_id)
            .await?;
        resources.insert(uri.to_string(), resource);

        self.transactions
            .update_resources(transaction, resources, request_id)
            .await?;
        Ok(())
    }
}
