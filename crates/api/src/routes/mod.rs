pub mod beers;
pub mod health;
pub mod manufacturers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /manufacturers                list, create
/// /manufacturers/{id}           get, update, delete
/// /manufacturers/{id}/beers     scoped listing
/// /beers                        list, create
/// /beers/{id}                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/manufacturers", manufacturers::router())
        .nest("/beers", beers::router())
}
