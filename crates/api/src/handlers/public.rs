//! Handlers for the public marketing payload.
//!
//! The marketing site renders its landing page from one request; this
//! module assembles the active, position-ordered content sections into a
//! single response.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use showroom_db::models::content::{AboutSection, CoreValue, HeroBanner};
use showroom_db::repositories::{AboutSectionRepo, CoreValueRepo, HeroBannerRepo};

use crate::error::AppResult;
use crate::response::Envelope;
use crate::state::AppState;

/// The landing page payload: active sections in display order.
#[derive(Debug, Serialize)]
pub struct HomeContent {
    pub hero_banners: Vec<HeroBanner>,
    pub about_sections: Vec<AboutSection>,
    pub core_values: Vec<CoreValue>,
}

/// GET /api/v1/public/home
pub async fn home(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let hero_banners = HeroBannerRepo::list_active(&state.pool).await?;
    let about_sections = AboutSectionRepo::list_active(&state.pool).await?;
    let core_values = CoreValueRepo::list_active(&state.pool).await?;

    tracing::debug!(
        hero_banners = hero_banners.len(),
        about_sections = about_sections.len(),
        core_values = core_values.len(),
        "Home content assembled",
    );

    Ok(Json(Envelope::ok(
        "Home content fetched",
        HomeContent {
            hero_banners,
            about_sections,
            core_values,
        },
    )))
}
