pub mod etag;
pub mod mapper;
pub mod service;
pub mod validation;

pub const FILING_KIND: &str = "registered-email-address";
pub const FILING_DESCRIPTION: &str = "Registered email address";
pub const LINK_SELF: &str = "self";
pub const LINK_RESOURCE: &str = "resource";
pub const LINK_VALIDATION_STATUS: &str = "validation_status";
pub const VALIDATION_STATUS_URI_SUFFIX: &str = "/validation-status";

/// `/transactions/{transaction_id}/registered-email-address/{submission_id}`
pub fn submission_uri(transaction_id: &str, submission_id: &str) -> String {
    format!("/transactions/{transaction_id}/{FILING_KIND}/{submission_id}")
}
