//! Marketing content section models and DTOs.
//!
//! The six CMS tables share one lifecycle (created in the admin, rendered
//! on the public marketing pages, toggled with `is_active`), so their
//! models live together.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use showroom_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Hero banners
// ---------------------------------------------------------------------------

/// A hero banner row from the `hero_banners` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroBanner {
    pub id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHeroBanner {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    pub subtitle: Option<String>,
    #[validate(length(min = 1))]
    pub image_url: String,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHeroBanner {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// About sections
// ---------------------------------------------------------------------------

/// An about section row from the `about_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AboutSection {
    pub id: DbId,
    pub heading: String,
    pub body: String,
    pub image_url: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAboutSection {
    #[validate(length(min = 1, max = 300))]
    pub heading: String,
    #[validate(length(min = 1))]
    pub body: String,
    pub image_url: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAboutSection {
    pub heading: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Core values
// ---------------------------------------------------------------------------

/// A core value row from the `core_values` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CoreValue {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCoreValue {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub icon: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCoreValue {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Media centre
// ---------------------------------------------------------------------------

/// A media centre row from the `media_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaItem {
    pub id: DbId,
    pub title: String,
    /// `image` or `video`.
    pub kind: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub published_at: Option<Timestamp>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMediaItem {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    pub kind: String,
    #[validate(length(min = 1))]
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub published_at: Option<Timestamp>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMediaItem {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub published_at: Option<Timestamp>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// An event row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEvent {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

/// An announcement row from the `announcements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Announcement {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub published_at: Option<Timestamp>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnnouncement {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    #[validate(length(min = 1))]
    pub body: String,
    pub published_at: Option<Timestamp>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAnnouncement {
    pub title: Option<String>,
    pub body: Option<String>,
    pub published_at: Option<Timestamp>,
    pub is_active: Option<bool>,
}
