pub mod extractor;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const ERIC_IDENTITY_HEADER: &str = "eric-identity";
pub const ERIC_IDENTITY_TYPE_HEADER: &str = "eric-identity-type";
pub const ERIC_KEY_PRIVILEGES_HEADER: &str = "eric-authorised-key-privileges";

pub const INTERNAL_APP_PRIVILEGE: &str = "internal-app";
