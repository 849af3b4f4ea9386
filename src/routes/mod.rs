pub mod filings;
pub mod registered_email_address;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/transactions/{transaction_id}/registered-email-address",
            post(registered_email_address::create).get(registered_email_address::get),
        )
        .route(
            "/transactions/{transaction_id}/registered-email-address/validation-status",
            get(registered_email_address::validation_status),
        )
}

pub fn private_routes() -> Router<SharedState> {
    Router::new().route(
        "/private/transactions/{transaction_id}/registered-email-address/filings",
        get(filings::list),
    )
}
