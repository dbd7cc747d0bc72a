//! Route definitions for the marketing content sections.

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Routes mounted at `/content`.
///
/// ```text
/// GET    /hero-banners           -> list_hero_banners
/// POST   /hero-banners           -> create_hero_banner
/// GET    /hero-banners/{id}      -> get_hero_banner
/// PUT    /hero-banners/{id}      -> update_hero_banner
/// DELETE /hero-banners/{id}      -> delete_hero_banner
///
/// /about-sections, /core-values, /media-items, /events and
/// /announcements follow the same shape.
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/hero-banners",
            get(content::list_hero_banners).post(content::create_hero_banner),
        )
        .route(
            "/hero-banners/{id}",
            get(content::get_hero_banner)
                .put(content::update_hero_banner)
                .delete(content::delete_hero_banner),
        )
        .route(
            "/about-sections",
            get(content::list_about_sections).post(content::create_about_section),
        )
        .route(
            "/about-sections/{id}",
            get(content::get_about_section)
                .put(content::update_about_section)
                .delete(content::delete_about_section),
        )
        .route(
            "/core-values",
            get(content::list_core_values).post(content::create_core_value),
        )
        .route(
            "/core-values/{id}",
            get(content::get_core_value)
                .put(content::update_core_value)
                .delete(content::delete_core_value),
        )
        .route(
            "/media-items",
            get(content::list_media_items).post(content::create_media_item),
        )
        .route(
            "/media-items/{id}",
            get(content::get_media_item)
                .put(content::update_media_item)
                .delete(content::delete_media_item),
        )
        .route(
            "/events",
            get(content::list_events).post(content::create_event),
        )
        .route(
            "/events/{id}",
            get(content::get_event)
                .put(content::update_event)
                .delete(content::delete_event),
        )
        .route(
            "/announcements",
            get(content::list_announcements).post(content::create_announcement),
        )
        .route(
            "/announcements/{id}",
            get(content::get_announcement)
                .put(content::update_announcement)
                .delete(content::delete_announcement),
        )
}
