//! Manufacturer entity model and DTOs.

use catalogue_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A manufacturer row from the `manufacturers` table. Read paths only
/// ever return non-deleted rows, so the soft-delete flag is not
/// surfaced here.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Manufacturer {
    pub id: DbId,
    pub name: String,
    pub nationality: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a manufacturer.
///
/// `id` is accepted only so a caller-supplied value can be rejected;
/// identities are assigned by the database.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateManufacturer {
    pub id: Option<DbId>,
    pub name: String,
    pub nationality: String,
}

/// DTO for updating a manufacturer. Only present fields are applied;
/// absent fields keep their persisted values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateManufacturer {
    pub name: Option<String>,
    pub nationality: Option<String>,
}
