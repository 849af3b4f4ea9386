use std::sync::Arc;

use crate::submission::service::RegisteredEmailAddressService;
use crate::transactions::TransactionGateway;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub service: RegisteredEmailAddressService,
    pub transactions: Arc<dyn TransactionGateway>,
}
