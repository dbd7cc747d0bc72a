//! Route definitions for the public marketing payload.

use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Routes mounted at `/public`.
///
/// ```text
/// GET /home -> home (active hero banners, about sections, core values)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/home", get(public::home))
}
