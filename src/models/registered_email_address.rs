use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

pub type Links = HashMap<String, String>;

/// Stored form of a registered email address submission.
///
/// Everything except the two user-supplied fields stays `None` until the
/// create workflow has inserted and stamped the record.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RegisteredEmailAddress {
    pub id: Option<Uuid>,
    pub transaction_id: Option<String>,
    pub registered_email_address: String,
    pub accept_appropriate_email_address_statement: bool,
    pub links: Option<Json<Links>>,
    pub etag: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by_user_id: Option<String>,
    pub http_request_id: Option<String>,
}

/// Request body and response representation of a submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisteredEmailAddressDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub registered_email_address: String,
    #[serde(default)]
    pub accept_appropriate_email_address_statement: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_user_id: Option<String>,
}
