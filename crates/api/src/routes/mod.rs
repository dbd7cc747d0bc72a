pub mod cars;
pub mod content;
pub mod health;
pub mod public;
pub mod requests;
pub mod reservations;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                               list, create
/// /users/{id}                          get, update, delete
///
/// /cars                                list, create
/// /cars/{id}                           get, update, delete
///
/// /reservations                        list, create
/// /reservations/{id}                   get, update, delete
///
/// /requests                            list, create
/// /requests/{id}                       get, update, delete
///
/// /content/hero-banners                list, create
/// /content/hero-banners/{id}           get, update, delete
/// /content/about-sections              list, create
/// /content/about-sections/{id}         get, update, delete
/// /content/core-values                 list, create
/// /content/core-values/{id}            get, update, delete
/// /content/media-items                 list, create
/// /content/media-items/{id}            get, update, delete
/// /content/events                      list, create
/// /content/events/{id}                 get, update, delete
/// /content/announcements               list, create
/// /content/announcements/{id}          get, update, delete
///
/// /public/home                         marketing landing payload
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // User management.
        .nest("/users", users::router())
        // Car inventory.
        .nest("/cars", cars::router())
        // Reservations (embed user summaries in list responses).
        .nest("/reservations", reservations::router())
        // Customer requests (test drives, inquiries, financing).
        .nest("/requests", requests::router())
        // Marketing content sections.
        .nest("/content", content::router())
        // Public marketing payload.
        .nest("/public", public::router())
}
