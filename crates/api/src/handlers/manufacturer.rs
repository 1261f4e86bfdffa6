//! Handlers for the `/manufacturers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalogue_core::error::CoreError;
use catalogue_core::page::Page;
use catalogue_core::types::DbId;
use catalogue_db::models::beer::Beer;
use catalogue_db::models::manufacturer::{CreateManufacturer, Manufacturer, UpdateManufacturer};
use catalogue_db::repositories::{BeerRepo, ManufacturerRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/v1/manufacturers
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Page<Manufacturer>>> {
    let params = ListParams::from_pairs(pairs)?;
    let sort = params.sort_spec()?;
    let page = ManufacturerRepo::list(&state.pool, &sort, &params.page_request()).await?;
    Ok(Json(page))
}

/// GET /api/v1/manufacturers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Manufacturer>> {
    let manufacturer = ManufacturerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Manufacturer",
            id,
        }))?;
    Ok(Json(manufacturer))
}

/// GET /api/v1/manufacturers/{id}/beers
///
/// The parent check runs before anything else, so an unknown or
/// soft-deleted manufacturer reports `ParentNotFound` even when the
/// sort criteria or paging values are also bad.
pub async fn list_beers(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Page<Beer>>> {
    if !ManufacturerRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::ParentNotFound {
            entity: "Manufacturer",
            id,
        }));
    }
    let params = ListParams::from_pairs(pairs)?;
    let sort = params.sort_spec()?;
    let page =
        BeerRepo::list_by_manufacturer(&state.pool, id, &sort, &params.page_request()).await?;
    Ok(Json(page))
}

/// POST /api/v1/manufacturers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateManufacturer>,
) -> AppResult<(StatusCode, Json<Manufacturer>)> {
    if input.id.is_some() {
        return Err(AppError::Core(CoreError::IdentityAlreadyAssigned {
            entity: "Manufacturer",
        }));
    }
    require_non_empty("manufacturer name", &input.name)?;
    require_non_empty("manufacturer nationality", &input.nationality)?;
    let manufacturer = ManufacturerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(manufacturer)))
}

/// PUT /api/v1/manufacturers/{id}
///
/// Partial update: only fields present in the payload overwrite the
/// persisted values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateManufacturer>,
) -> AppResult<Json<Manufacturer>> {
    let manufacturer = ManufacturerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Manufacturer",
            id,
        }))?;
    Ok(Json(manufacturer))
}

/// DELETE /api/v1/manufacturers/{id}
///
/// Soft delete; the manufacturer's beers go with it. Deleting an id
/// that is unknown or already deleted reports not-found.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ManufacturerRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Manufacturer",
            id,
        }))
    }
}
