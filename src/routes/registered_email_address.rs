use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::auth::extractor::{EricIdentity, RequestId, UserIdentity};
use crate::error::{AppError, ServiceError};
use crate::models::{RegisteredEmailAddressDto, ValidationStatus};
use crate::state::SharedState;
use crate::submission::{validation, LINK_SELF};
use crate::transactions::TransactionContext;

pub async fn create(
    State(state): State<SharedState>,
    RequestId(request_id): RequestId,
    UserIdentity(identity): UserIdentity,
    TransactionContext(transaction): TransactionContext,
    body: Result<Json<RegisteredEmailAddressDto>, JsonRejection>,
) -> Result<Response, AppError> {
    tracing::info!(request_id, "Create registered email address request for transaction {}", transaction.id);

    let Json(req) = body?;
    validation::validate_input(&req).map_err(AppError::Validation)?;

    let created = state
        .service
        .create_submission(&transaction, &req, &request_id, &identity.user_id)
        .await
        .map_err(|e| {
            // Internal failures are logged when the response is built.
            if let ServiceError::DuplicateSubmission(_) = e {
                tracing::warn!(request_id, "{e}");
            }
            AppError::from(e)
        })?;

    let location = created
        .links
        .as_ref()
        .and_then(|links| links.get(LINK_SELF))
        .cloned()
        .unwrap_or_default();

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)).into_response())
}

pub async fn get(
    State(state): State<SharedState>,
    Path(transaction_id): Path<String>,
    RequestId(request_id): RequestId,
    _identity: EricIdentity,
) -> Result<Json<RegisteredEmailAddressDto>, AppError> {
    let submission = state
        .service
        .get_submission(&transaction_id, &request_id)
        .await?;
    Ok(Json(submission))
}

pub async fn validation_status(
    State(state): State<SharedState>,
    Path(transaction_id): Path<String>,
    RequestId(request_id): RequestId,
    _identity: EricIdentity,
) -> Result<Json<ValidationStatus>, AppError> {
    tracing::info!(request_id, "Validation status requested for transaction {transaction_id}");

    let status = state
        .service
        .get_validation_status(&transaction_id, &request_id)
        .await?;
    Ok(Json(status))
}
