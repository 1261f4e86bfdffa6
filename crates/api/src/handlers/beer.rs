//! Handlers for the `/beers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalogue_core::error::CoreError;
use catalogue_core::page::Page;
use catalogue_core::types::DbId;
use catalogue_db::models::beer::{Beer, CreateBeer, UpdateBeer};
use catalogue_db::repositories::{BeerRepo, ManufacturerRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/v1/beers
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Page<Beer>>> {
    let params = ListParams::from_pairs(pairs)?;
    let sort = params.sort_spec()?;
    let page = BeerRepo::list(&state.pool, &sort, &params.page_request()).await?;
    Ok(Json(page))
}

/// GET /api/v1/beers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Beer>> {
    let beer = BeerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Beer", id }))?;
    Ok(Json(beer))
}

/// POST /api/v1/beers
///
/// The referenced manufacturer must exist and not be soft-deleted.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBeer>,
) -> AppResult<(StatusCode, Json<Beer>)> {
    if input.id.is_some() {
        return Err(AppError::Core(CoreError::IdentityAlreadyAssigned {
            entity: "Beer",
        }));
    }
    require_non_empty("beer name", &input.name)?;
    require_non_empty("beer graduation", &input.graduation)?;
    require_non_empty("beer type", &input.beer_type)?;
    require_non_empty("beer description", &input.description)?;
    if !ManufacturerRepo::exists(&state.pool, input.manufacturer_id).await? {
        return Err(AppError::Core(CoreError::ParentNotFound {
            entity: "Manufacturer",
            id: input.manufacturer_id,
        }));
    }
    let beer = BeerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(beer)))
}

/// PUT /api/v1/beers/{id}
///
/// Partial update: only fields present in the payload overwrite the
/// persisted values. A payload `manufacturer_id` differing from the
/// persisted one is rejected; the relationship is fixed at creation.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBeer>,
) -> AppResult<Json<Beer>> {
    let existing = BeerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Beer", id }))?;
    if let Some(manufacturer_id) = input.manufacturer_id {
        if manufacturer_id != existing.manufacturer_id {
            return Err(AppError::Core(CoreError::ImmutableRelationship {
                entity: "Beer",
                relation: "manufacturer",
            }));
        }
    }
    let beer = BeerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Beer", id }))?;
    Ok(Json(beer))
}

/// DELETE /api/v1/beers/{id}
///
/// Soft delete. Deleting an id that is unknown or already deleted
/// reports not-found.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BeerRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Beer", id }))
    }
}
