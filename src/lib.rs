pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;
pub mod transactions;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, Request};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::auth::REQUEST_ID_HEADER;
use crate::config::Config;
use crate::db::SubmissionStore;
use crate::state::{AppState, SharedState};
use crate::submission::service::RegisteredEmailAddressService;
use crate::transactions::TransactionGateway;

pub fn build_app(
    config: Config,
    store: Arc<dyn SubmissionStore>,
    transactions: Arc<dyn TransactionGateway>,
) -> Router {
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        service: RegisteredEmailAddressService::new(store, transactions.clone()),
        transactions,
    });

    Router::new()
        .merge(routes::api_routes())
        .merge(routes::private_routes())
        .route("/healthcheck", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .with_state(state)
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id,
    )
}

async fn health() -> &'static str {
    "ok"
}
