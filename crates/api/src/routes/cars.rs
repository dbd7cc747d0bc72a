//! Route definitions for the car inventory.

use axum::routing::get;
use axum::Router;

use crate::handlers::cars;
use crate::state::AppState;

/// Routes mounted at `/cars`.
///
/// ```text
/// GET    /        -> list (page, limit, search, branch, status_id)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cars::list).post(cars::create))
        .route(
            "/{id}",
            get(cars::get_by_id).put(cars::update).delete(cars::delete),
        )
}
