pub mod invoice_items;
pub mod invoices;
pub mod tax_profiles;
pub mod users;

use uuid::Uuid;

use crate::error::ApiError;

/// Path ids must be UUIDs; anything else is a 400 before the service runs.
pub(crate) fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::bad_request("Invalid id"))
}
