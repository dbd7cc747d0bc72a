//! Route definitions for reservations.

use axum::routing::get;
use axum::Router;

use crate::handlers::reservations;
use crate::state::AppState;

/// Routes mounted at `/reservations`.
///
/// ```text
/// GET    /        -> list (page, limit, search, status_id, car_id)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reservations::list).post(reservations::create))
        .route(
            "/{id}",
            get(reservations::get_by_id)
                .put(reservations::update)
                .delete(reservations::delete),
        )
}
