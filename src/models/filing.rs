use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filing {
    pub kind: String,
    pub description: String,
    pub data: FilingData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilingData {
    pub registered_email_address: String,
    pub accept_appropriate_email_address_statement: bool,
}
