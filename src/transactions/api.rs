use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::json;

use crate::auth::REQUEST_ID_HEADER;
use crate::models::{Resource, Transaction};

use super::{GatewayError, TransactionGateway};

/// HTTP client for the transactions API, authenticated with an API key.
pub struct TransactionsApiClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl TransactionsApiClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let base_url = Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| GatewayError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// `{base}/{prefix..}/{transaction_id}` with the id percent-encoded as a
    /// single path segment.
    fn transaction_url(&self, prefix: &[&str], transaction_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(prefix).push(transaction_id);
        }
        url
    }

    fn check_status(transaction_id: &str, status: StatusCode) -> Result<(), GatewayError> {
        match status {
            StatusCode::NOT_FOUND => Err(GatewayError::NotFound(transaction_id.to_string())),
            s if s.is_success() => Ok(()),
            s => Err(GatewayError::Status {
                transaction_id: transaction_id.to_string(),
                status: s.as_u16(),
            }),
        }
    }
}

#[async_trait]
impl TransactionGateway for TransactionsApiClient {
    async fn get_transaction(
        &self,
        transaction_id: &str,
        request_id: &str,
    ) -> Result<Transaction, GatewayError> {
        let url = self.transaction_url(&["transactions"], transaction_id);
        tracing::debug!(request_id, "GET {url}");

        let resp = self
            .client
            .get(url)
            .basic_auth(&self.api_key, None::<&str>)
            .header(REQUEST_ID_HEADER, request_id)
            .send()
            .await?;

        Self::check_status(transaction_id, resp.status())?;
        Ok(resp.json::<Transaction>().await?)
    }

    async fn update_resources(
        &self,
        transaction: &Transaction,
        resources: HashMap<String, Resource>,
        request_id: &str,
    ) -> Result<(), GatewayError> {
        let url = self.transaction_url(&["private", "transactions"], &transaction.id);
        tracing::debug!(request_id, "PATCH {url} with {} resources", resources.len());

        let resp = self
            .client
            .patch(url)
            .basic_auth(&self.api_key, None::<&str>)
            .header(REQUEST_ID_HEADER, request_id)
            .json(&json!({ "resources": resources }))
            .send()
            .await?;

        Self::check_status(&transaction.id, resp.status())
    }
}
