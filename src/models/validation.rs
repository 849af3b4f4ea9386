use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationStatus {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub error: String,
    pub location: String,
    pub location_type: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationError {
    /// A `ch:validation` error pointing at a top-level JSON field.
    pub fn field(field: &str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            location: format!("$.{field}"),
            location_type: "json-path".to_string(),
            kind: "ch:validation".to_string(),
        }
    }
}
