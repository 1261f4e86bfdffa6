//! Beer entity model and DTOs.

use catalogue_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A beer row from the `beers` table. Read paths only ever return
/// non-deleted rows, so the soft-delete flag is not surfaced here.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Beer {
    pub id: DbId,
    pub name: String,
    /// Alcohol content, free text (e.g. "5.2%").
    pub graduation: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub beer_type: String,
    pub description: String,
    pub manufacturer_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a beer.
///
/// `id` is accepted only so a caller-supplied value can be rejected;
/// identities are assigned by the database. `manufacturer_id` must
/// reference an existing, non-deleted manufacturer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBeer {
    pub id: Option<DbId>,
    pub name: String,
    pub graduation: String,
    #[serde(rename = "type")]
    pub beer_type: String,
    pub description: String,
    pub manufacturer_id: DbId,
}

/// DTO for updating a beer. Only present fields are applied; absent
/// fields keep their persisted values.
///
/// `manufacturer_id` is accepted only so the immutability of the
/// relationship can be checked: a value differing from the persisted
/// one is rejected, and the column is never written by updates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBeer {
    pub name: Option<String>,
    pub graduation: Option<String>,
    #[serde(rename = "type")]
    pub beer_type: Option<String>,
    pub description: Option<String>,
    pub manufacturer_id: Option<DbId>,
}
