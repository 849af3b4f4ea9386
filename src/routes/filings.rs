use axum::extract::State;
use axum::Json;

use crate::auth::extractor::{InternalApp, RequestId};
use crate::error::AppError;
use crate::models::Filing;
use crate::state::SharedState;
use crate::transactions::TransactionContext;

pub async fn list(
    State(state): State<SharedState>,
    RequestId(request_id): RequestId,
    _app: InternalApp,
    TransactionContext(transaction): TransactionContext,
) -> Result<Json<Vec<Filing>>, AppError> {
    let filings = state.service.get_filings(&transaction, &request_id).await?;
    Ok(Json(filings))
}
