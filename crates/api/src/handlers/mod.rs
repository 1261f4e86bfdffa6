//! HTTP handlers, grouped per resource.

pub mod beer;
pub mod manufacturer;

use crate::error::AppError;

/// Reject blank required fields on create payloads.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} should be provided")));
    }
    Ok(())
}
