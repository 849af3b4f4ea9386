use std::collections::HashMap;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::auth::extractor::RequestId;
use crate::error::AppError;
use crate::models::Transaction;
use crate::state::SharedState;

/// The transaction named by the `{transaction_id}` path segment, loaded from
/// the transactions service.
#[derive(Debug, Clone)]
pub struct TransactionContext(pub Transaction);

impl FromRequestParts<SharedState> for TransactionContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("Invalid path parameters".to_string()))?;

        let transaction_id = params
            .get("transaction_id")
            .ok_or_else(|| AppError::BadRequest("Missing transaction id".to_string()))?;

        let RequestId(request_id) = RequestId::from_request_parts(parts, state).await?;

        let transaction = state
            .transactions
            .get_transaction(transaction_id, &request_id)
            .await?;

        if transaction.id != *transaction_id {
            tracing::warn!(
                request_id,
                "Transactions API returned transaction {} for {transaction_id}",
                transaction.id
            );
            return Err(AppError::NotFound("Transaction not found".to_string()));
        }

        tracing::debug!(request_id, "Loaded transaction {}", transaction.id);
        Ok(TransactionContext(transaction))
    }
}
