//! Postgres store tests. Run with `DATABASE_URL` set and `--ignored`.

use std::collections::HashMap;

use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use registered_email_address_api::db::postgres::MIGRATOR;
use registered_email_address_api::db::{PgStore, StoreError, SubmissionStore};
use registered_email_address_api::models::RegisteredEmailAddress;

fn admin_url(base_url: &str) -> String {
    base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.to_string())
}

/// Create a throwaway database, run migrations, return its pool and name.
async fn fresh_store() -> (PgStore, String) {
    let _ = dotenvy::dotenv();
    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let db_name = format!("rea_test_{}", Uuid::now_v7().simple());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect to postgres for test DB creation");
    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");
    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");
    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    (PgStore::new(pool), db_name)
}

async fn cleanup(pool: &PgPool, db_name: &str) {
    pool.close().await;
    let base_url = std::env::var("DATABASE_URL").unwrap();
    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect for cleanup");
    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;
    admin_pool.close().await;
}

fn record(transaction_id: &str) -> RegisteredEmailAddress {
    RegisteredEmailAddress {
        id: None,
        transaction_id: Some(transaction_id.to_string()),
        registered_email_address: "a@b.com".to_string(),
        accept_appropriate_email_address_statement: true,
        links: None,
        etag: Some("etag-1".to_string()),
        created_at: None,
        created_by_user_id: None,
        http_request_id: None,
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn insert_save_and_find() {
    let (store, db_name) = fresh_store().await;

    let mut inserted = store.insert(record("T1")).await.unwrap();
    assert!(inserted.id.is_some());

    inserted.links = Some(Json(HashMap::from([(
        "self".to_string(),
        "/transactions/T1/registered-email-address/x".to_string(),
    )])));
    inserted.created_by_user_id = Some("user-1".to_string());
    store.save(inserted.clone()).await.unwrap();

    let found = store.find_by_transaction_id("T1").await.unwrap().unwrap();
    assert_eq!(found.id, inserted.id);
    assert_eq!(found.created_by_user_id.as_deref(), Some("user-1"));
    assert_eq!(
        found.links.unwrap().0["self"],
        "/transactions/T1/registered-email-address/x"
    );
    assert!(store.find_by_transaction_id("T2").await.unwrap().is_none());

    cleanup(store.pool(), &db_name).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn second_insert_for_transaction_is_rejected() {
    let (store, db_name) = fresh_store().await;

    store.insert(record("T1")).await.unwrap();
    let err = store.insert(record("T1")).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateTransaction(ref id) if id == "T1"));

    cleanup(store.pool(), &db_name).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn save_of_unknown_record_is_not_found() {
    let (store, db_name) = fresh_store().await;

    let mut orphan = record("T1");
    orphan.id = Some(Uuid::now_v7());
    let err = store.save(orphan).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    cleanup(store.pool(), &db_name).await;
}
