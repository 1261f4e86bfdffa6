//! Route definitions for the `/beers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::beer;
use crate::state::AppState;

/// Routes mounted at `/beers`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(beer::list).post(beer::create))
        .route(
            "/{id}",
            get(beer::get_by_id).put(beer::update).delete(beer::delete),
        )
}
