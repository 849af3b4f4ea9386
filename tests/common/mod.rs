#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use registered_email_address_api::config::Config;
use registered_email_address_api::db::MemoryStore;
use registered_email_address_api::models::{Resource, Transaction};
use registered_email_address_api::transactions::MemoryTransactionGateway;

pub const USER_ID: &str = "Y2VkZWVlMzhlZWFjY2M4MzQ3MT";

/// A running test server backed by in-memory collaborators.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    pub transactions: Arc<MemoryTransactionGateway>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Register an open transaction with the fake transactions service.
    pub fn open_transaction(&self, id: &str) -> Transaction {
        let transaction = Transaction {
            id: id.to_string(),
            status: Some("open".to_string()),
            company_number: Some("00006400".to_string()),
            resources: HashMap::new(),
        };
        self.transactions.insert(transaction.clone());
        transaction
    }

    pub fn close_transaction(&self, id: &str) {
        let mut transaction = self.transactions.get(id).expect("unknown transaction");
        transaction.status = Some("closed".to_string());
        self.transactions.insert(transaction);
    }

    pub fn add_resource(&self, transaction_id: &str, uri: &str, kind: &str) {
        let mut transaction = self
            .transactions
            .get(transaction_id)
            .expect("unknown transaction");
        transaction.resources.insert(
            uri.to_string(),
            Resource {
                kind: kind.to_string(),
                links: HashMap::from([("resource".to_string(), uri.to_string())]),
            },
        );
        self.transactions.insert(transaction);
    }

    /// Attach the headers the API gateway sets for a signed-in user.
    pub fn as_user(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("X-Request-Id", Uuid::now_v7().to_string())
            .header("ERIC-Identity", USER_ID)
            .header("ERIC-Identity-Type", "oauth2")
    }

    /// Attach the headers the API gateway sets for an internal API key.
    pub fn as_internal_app(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("X-Request-Id", Uuid::now_v7().to_string())
            .header("ERIC-Identity", "internal-key")
            .header("ERIC-Identity-Type", "key")
            .header("ERIC-Authorised-Key-Privileges", "internal-app")
    }

    /// POST a submission as a signed-in user, return (body, status).
    pub async fn create(&self, transaction_id: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .as_user(self.client.post(self.url(&format!(
                "/transactions/{transaction_id}/registered-email-address"
            ))))
            .json(body)
            .send()
            .await
            .expect("create request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn validation_status(&self, transaction_id: &str) -> (Value, StatusCode) {
        self.get_as_user(&format!(
            "/transactions/{transaction_id}/registered-email-address/validation-status"
        ))
        .await
    }

    pub async fn get_as_user(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .as_user(self.client.get(self.url(path)))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn filings(&self, transaction_id: &str) -> (Value, StatusCode) {
        let resp = self
            .as_internal_app(self.client.get(self.url(&format!(
                "/private/transactions/{transaction_id}/registered-email-address/filings"
            ))))
            .send()
            .await
            .expect("filings request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: None,
        transactions_api_url: "http://localhost:0".to_string(),
        api_key: "test-api-key".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 65_536,
        http_timeout_secs: 5,
        log_level: "warn".to_string(),
    }
}

/// Spawn the app on a random port with an empty in-memory store and
/// transactions service.
pub async fn spawn_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let transactions = Arc::new(MemoryTransactionGateway::new());

    let app = registered_email_address_api::build_app(
        test_config(),
        store.clone(),
        transactions.clone(),
    );

    TestApp {
        addr: serve(app).await,
        client: Client::new(),
        store,
        transactions,
    }
}

/// Serve `app` on a random port.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    addr
}
