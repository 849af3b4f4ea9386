pub mod filing;
pub mod registered_email_address;
pub mod transaction;
pub mod validation;

pub use filing::{Filing, FilingData};
pub use registered_email_address::{Links, RegisteredEmailAddress, RegisteredEmailAddressDto};
pub use transaction::{Resource, Transaction};
pub use validation::{ValidationError, ValidationStatus};
