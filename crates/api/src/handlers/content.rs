//! Handlers for the marketing content sections.
//!
//! Hero banners, about sections, and core values are position-ordered;
//! media items, events, and announcements are date-ordered and searchable
//! by title. All six share the same CRUD shape.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use showroom_core::error::CoreError;
use showroom_core::kinds::validate_media_kind;
use showroom_core::pagination::{clamp_limit, clamp_page, Pagination};
use showroom_core::types::DbId;
use showroom_db::models::content::{
    CreateAboutSection, CreateAnnouncement, CreateCoreValue, CreateEvent, CreateHeroBanner,
    CreateMediaItem, UpdateAboutSection, UpdateAnnouncement, UpdateCoreValue, UpdateEvent,
    UpdateHeroBanner, UpdateMediaItem,
};
use showroom_db::repositories::{
    AboutSectionRepo, AnnouncementRepo, CoreValueRepo, EventRepo, HeroBannerRepo, MediaItemRepo,
};

use crate::error::AppResult;
use crate::query::{normalize_search, ListParams};
use crate::response::{Envelope, PageData};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Hero banners
// ---------------------------------------------------------------------------

/// GET /api/v1/content/hero-banners
pub async fn list_hero_banners(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);

    let items = HeroBannerRepo::list(&state.pool, limit, Pagination::offset(page, limit)).await?;
    let total = HeroBannerRepo::count(&state.pool).await?;

    Ok(Json(Envelope::ok(
        "Hero banners fetched",
        PageData::new(items, page, limit, total),
    )))
}

/// GET /api/v1/content/hero-banners/{id}
pub async fn get_hero_banner(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let banner = HeroBannerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "HeroBanner",
            id,
        })?;

    Ok(Json(Envelope::ok("Hero banner fetched", banner)))
}

/// POST /api/v1/content/hero-banners
pub async fn create_hero_banner(
    State(state): State<AppState>,
    Json(input): Json<CreateHeroBanner>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let banner = HeroBannerRepo::create(&state.pool, &input).await?;

    tracing::info!(hero_banner_id = banner.id, "Hero banner created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Hero banner created", banner)),
    ))
}

/// PUT /api/v1/content/hero-banners/{id}
pub async fn update_hero_banner(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHeroBanner>,
) -> AppResult<impl IntoResponse> {
    let banner = HeroBannerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "HeroBanner",
            id,
        })?;

    tracing::info!(hero_banner_id = id, "Hero banner updated");

    Ok(Json(Envelope::ok("Hero banner updated", banner)))
}

/// DELETE /api/v1/content/hero-banners/{id}
pub async fn delete_hero_banner(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !HeroBannerRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "HeroBanner",
            id,
        }
        .into());
    }

    tracing::info!(hero_banner_id = id, "Hero banner deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// About sections
// ---------------------------------------------------------------------------

/// GET /api/v1/content/about-sections
pub async fn list_about_sections(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);

    let items = AboutSectionRepo::list(&state.pool, limit, Pagination::offset(page, limit)).await?;
    let total = AboutSectionRepo::count(&state.pool).await?;

    Ok(Json(Envelope::ok(
        "About sections fetched",
        PageData::new(items, page, limit, total),
    )))
}

/// GET /api/v1/content/about-sections/{id}
pub async fn get_about_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let section = AboutSectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "AboutSection",
            id,
        })?;

    Ok(Json(Envelope::ok("About section fetched", section)))
}

/// POST /api/v1/content/about-sections
pub async fn create_about_section(
    State(state): State<AppState>,
    Json(input): Json<CreateAboutSection>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let section = AboutSectionRepo::create(&state.pool, &input).await?;

    tracing::info!(about_section_id = section.id, "About section created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("About section created", section)),
    ))
}

/// PUT /api/v1/content/about-sections/{id}
pub async fn update_about_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAboutSection>,
) -> AppResult<impl IntoResponse> {
    let section = AboutSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "AboutSection",
            id,
        })?;

    tracing::info!(about_section_id = id, "About section updated");

    Ok(Json(Envelope::ok("About section updated", section)))
}

/// DELETE /api/v1/content/about-sections/{id}
pub async fn delete_about_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !AboutSectionRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "AboutSection",
            id,
        }
        .into());
    }

    tracing::info!(about_section_id = id, "About section deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Core values
// ---------------------------------------------------------------------------

/// GET /api/v1/content/core-values
pub async fn list_core_values(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);

    let items = CoreValueRepo::list(&state.pool, limit, Pagination::offset(page, limit)).await?;
    let total = CoreValueRepo::count(&state.pool).await?;

    Ok(Json(Envelope::ok(
        "Core values fetched",
        PageData::new(items, page, limit, total),
    )))
}

/// GET /api/v1/content/core-values/{id}
pub async fn get_core_value(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let value = CoreValueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "CoreValue",
            id,
        })?;

    Ok(Json(Envelope::ok("Core value fetched", value)))
}

/// POST /api/v1/content/core-values
pub async fn create_core_value(
    State(state): State<AppState>,
    Json(input): Json<CreateCoreValue>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let value = CoreValueRepo::create(&state.pool, &input).await?;

    tracing::info!(core_value_id = value.id, "Core value created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Core value created", value)),
    ))
}

/// PUT /api/v1/content/core-values/{id}
pub async fn update_core_value(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCoreValue>,
) -> AppResult<impl IntoResponse> {
    let value = CoreValueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "CoreValue",
            id,
        })?;

    tracing::info!(core_value_id = id, "Core value updated");

    Ok(Json(Envelope::ok("Core value updated", value)))
}

/// DELETE /api/v1/content/core-values/{id}
pub async fn delete_core_value(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CoreValueRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "CoreValue",
            id,
        }
        .into());
    }

    tracing::info!(core_value_id = id, "Core value deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Media centre
// ---------------------------------------------------------------------------

/// GET /api/v1/content/media-items
pub async fn list_media_items(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);
    let search = normalize_search(&params.search);

    let items =
        MediaItemRepo::list(&state.pool, search, limit, Pagination::offset(page, limit)).await?;
    let total = MediaItemRepo::count(&state.pool, search).await?;

    Ok(Json(Envelope::ok(
        "Media items fetched",
        PageData::new(items, page, limit, total),
    )))
}

/// GET /api/v1/content/media-items/{id}
pub async fn get_media_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = MediaItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "MediaItem",
            id,
        })?;

    Ok(Json(Envelope::ok("Media item fetched", item)))
}

/// POST /api/v1/content/media-items
pub async fn create_media_item(
    State(state): State<AppState>,
    Json(input): Json<CreateMediaItem>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_media_kind(&input.kind)?;

    let item = MediaItemRepo::create(&state.pool, &input).await?;

    tracing::info!(media_item_id = item.id, kind = %item.kind, "Media item created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Media item created", item)),
    ))
}

/// PUT /api/v1/content/media-items/{id}
pub async fn update_media_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMediaItem>,
) -> AppResult<impl IntoResponse> {
    if let Some(kind) = &input.kind {
        validate_media_kind(kind)?;
    }

    let item = MediaItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "MediaItem",
            id,
        })?;

    tracing::info!(media_item_id = id, "Media item updated");

    Ok(Json(Envelope::ok("Media item updated", item)))
}

/// DELETE /api/v1/content/media-items/{id}
pub async fn delete_media_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !MediaItemRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "MediaItem",
            id,
        }
        .into());
    }

    tracing::info!(media_item_id = id, "Media item deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// GET /api/v1/content/events
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);
    let search = normalize_search(&params.search);

    let items = EventRepo::list(&state.pool, search, limit, Pagination::offset(page, limit)).await?;
    let total = EventRepo::count(&state.pool, search).await?;

    Ok(Json(Envelope::ok(
        "Events fetched",
        PageData::new(items, page, limit, total),
    )))
}

/// GET /api/v1/content/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Event",
            id,
        })?;

    Ok(Json(Envelope::ok("Event fetched", event)))
}

/// POST /api/v1/content/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let event = EventRepo::create(&state.pool, &input).await?;

    tracing::info!(event_id = event.id, "Event created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Event created", event)),
    ))
}

/// PUT /api/v1/content/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Event",
            id,
        })?;

    tracing::info!(event_id = id, "Event updated");

    Ok(Json(Envelope::ok("Event updated", event)))
}

/// DELETE /api/v1/content/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !EventRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "Event",
            id,
        }
        .into());
    }

    tracing::info!(event_id = id, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

/// GET /api/v1/content/announcements
pub async fn list_announcements(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);
    let search = normalize_search(&params.search);

    let items =
        AnnouncementRepo::list(&state.pool, search, limit, Pagination::offset(page, limit)).await?;
    let total = AnnouncementRepo::count(&state.pool, search).await?;

    Ok(Json(Envelope::ok(
        "Announcements fetched",
        PageData::new(items, page, limit, total),
    )))
}

/// GET /api/v1/content/announcements/{id}
pub async fn get_announcement(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let announcement = AnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Announcement",
            id,
        })?;

    Ok(Json(Envelope::ok("Announcement fetched", announcement)))
}

/// POST /api/v1/content/announcements
pub async fn create_announcement(
    State(state): State<AppState>,
    Json(input): Json<CreateAnnouncement>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let announcement = AnnouncementRepo::create(&state.pool, &input).await?;

    tracing::info!(announcement_id = announcement.id, "Announcement created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Announcement created", announcement)),
    ))
}

/// PUT /api/v1/content/announcements/{id}
pub async fn update_announcement(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnnouncement>,
) -> AppResult<impl IntoResponse> {
    let announcement = AnnouncementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Announcement",
            id,
        })?;

    tracing::info!(announcement_id = id, "Announcement updated");

    Ok(Json(Envelope::ok("Announcement updated", announcement)))
}

/// DELETE /api/v1/content/announcements/{id}
pub async fn delete_announcement(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !AnnouncementRepo::delete(&state.pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "Announcement",
            id,
        }
        .into());
    }

    tracing::info!(announcement_id = id, "Announcement deleted");

    Ok(StatusCode::NO_CONTENT)
}
