use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

pub const STATUS_CLOSED: &str = "closed";

/// The subset of a transactions API transaction this service reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resources: HashMap<String, Resource>,
}

/// A link from a transaction to a filing resource held by another service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub kind: String,
    #[serde(default)]
    pub links: HashMap<String, String>,
}

impl Transaction {
    pub fn has_resource_of_kind(&self, kind: &str) -> bool {
        self.resources.values().any(|r| r.kind == kind)
    }

    pub fn is_closed(&self) -> bool {
        self.status.as_deref() == Some(STATUS_CLOSED)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, Resource>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HashMap<String, Resource>>::deserialize(deserializer)?.unwrap_or_default())
}
