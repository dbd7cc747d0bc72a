//! Route definitions for customer requests.

use axum::routing::get;
use axum::Router;

use crate::handlers::requests;
use crate::state::AppState;

/// Routes mounted at `/requests`.
///
/// ```text
/// GET    /        -> list (page, limit, search, status_id)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(requests::list).post(requests::create))
        .route(
            "/{id}",
            get(requests::get_by_id)
                .put(requests::update)
                .delete(requests::delete),
        )
}
