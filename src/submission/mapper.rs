use crate::models::{RegisteredEmailAddress, RegisteredEmailAddressDto};

/// New unsaved record carrying only the user-supplied fields.
pub fn to_record(dto: &RegisteredEmailAddressDto) -> RegisteredEmailAddress {
    RegisteredEmailAddress {
        id: None,
        transaction_id: None,
        registered_email_address: dto.registered_email_address.clone(),
        accept_appropriate_email_address_statement: dto.accept_appropriate_email_address_statement,
        links: None,
        etag: None,
        created_at: None,
        created_by_user_id: None,
        http_request_id: None,
    }
}

pub fn to_response(record: &RegisteredEmailAddress) -> RegisteredEmailAddressDto {
    RegisteredEmailAddressDto {
        id: record.id,
        registered_email_address: record.registered_email_address.clone(),
        accept_appropriate_email_address_statement: record
            .accept_appropriate_email_address_statement,
        links: record.links.as_ref().map(|links| links.0.clone()),
        etag: record.etag.clone(),
        created_at: record.created_at,
        created_by_user_id: record.created_by_user_id.clone(),
    }
}
