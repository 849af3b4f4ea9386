use std::sync::LazyLock;

use regex::Regex;

use crate::models::{RegisteredEmailAddress, RegisteredEmailAddressDto, ValidationError, ValidationStatus};

pub const EMAIL_FIELD: &str = "registered_email_address";
pub const STATEMENT_FIELD: &str = "accept_appropriate_email_address_statement";

pub const BLANK_EMAIL: &str = "registered_email_address must not be blank";
pub const INVALID_EMAIL: &str = "registered_email_address must have a valid email format";
pub const STATEMENT_NOT_ACCEPTED: &str =
    "accept_appropriate_email_address_statement must be true";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~\-]+@([^.@][^@\s]+)$").unwrap()
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn email_errors(email: &str) -> Vec<&'static str> {
    if email.trim().is_empty() {
        vec![BLANK_EMAIL]
    } else if !is_valid_email(email) {
        vec![INVALID_EMAIL]
    } else {
        vec![]
    }
}

/// Request body checks run before the create workflow. The statement flag is
/// not constrained here.
pub fn validate_input(dto: &RegisteredEmailAddressDto) -> Result<(), Vec<String>> {
    let errors: Vec<String> = email_errors(&dto.registered_email_address)
        .into_iter()
        .map(str::to_string)
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validation status of a stored submission.
pub fn validate(record: &RegisteredEmailAddress) -> ValidationStatus {
    let mut errors: Vec<ValidationError> = email_errors(&record.registered_email_address)
        .into_iter()
        .map(|msg| ValidationError::field(EMAIL_FIELD, msg))
        .collect();

    if !record.accept_appropriate_email_address_statement {
        errors.push(ValidationError::field(STATEMENT_FIELD, STATEMENT_NOT_ACCEPTED));
    }

    ValidationStatus {
        is_valid: errors.is_empty(),
        errors,
    }
}
