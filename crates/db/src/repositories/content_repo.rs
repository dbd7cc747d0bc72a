//! Repositories for the marketing content section tables.
//!
//! Hero banners, about sections, and core values are position-ordered and
//! expose a `list_active` helper for the public marketing payload. Media
//! items, events, and announcements are date-ordered and searchable by
//! title.

use sqlx::PgPool;

use showroom_core::types::DbId;

use crate::models::content::{
    AboutSection, Announcement, CoreValue, CreateAboutSection, CreateAnnouncement,
    CreateCoreValue, CreateEvent, CreateHeroBanner, CreateMediaItem, Event, HeroBanner,
    MediaItem, UpdateAboutSection, UpdateAnnouncement, UpdateCoreValue, UpdateEvent,
    UpdateHeroBanner, UpdateMediaItem,
};

/// Title search predicate shared by the searchable section tables.
const TITLE_FILTER: &str = "($1::text IS NULL OR title ILIKE '%' || $1 || '%')";

// ---------------------------------------------------------------------------
// Hero banners
// ---------------------------------------------------------------------------

const HERO_COLUMNS: &str = "id, title, subtitle, image_url, cta_label, cta_url, position, \
     is_active, created_at, updated_at";

/// Provides CRUD operations for hero banners.
pub struct HeroBannerRepo;

impl HeroBannerRepo {
    pub async fn create(pool: &PgPool, input: &CreateHeroBanner) -> Result<HeroBanner, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_banners (title, subtitle, image_url, cta_label, cta_url, position, is_active)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), COALESCE($7, TRUE))
             RETURNING {HERO_COLUMNS}"
        );
        sqlx::query_as::<_, HeroBanner>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_url)
            .bind(&input.cta_label)
            .bind(&input.cta_url)
            .bind(input.position)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeroBanner>, sqlx::Error> {
        let query = format!("SELECT {HERO_COLUMNS} FROM hero_banners WHERE id = $1");
        sqlx::query_as::<_, HeroBanner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all banners in display order.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<HeroBanner>, sqlx::Error> {
        let query = format!(
            "SELECT {HERO_COLUMNS} FROM hero_banners
             ORDER BY position ASC, id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, HeroBanner>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hero_banners")
            .fetch_one(pool)
            .await
    }

    /// Active banners in display order, for the public marketing payload.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<HeroBanner>, sqlx::Error> {
        let query = format!(
            "SELECT {HERO_COLUMNS} FROM hero_banners
             WHERE is_active ORDER BY position ASC, id ASC"
        );
        sqlx::query_as::<_, HeroBanner>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeroBanner,
    ) -> Result<Option<HeroBanner>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_banners SET
                title = COALESCE($2, title),
                subtitle = COALESCE($3, subtitle),
                image_url = COALESCE($4, image_url),
                cta_label = COALESCE($5, cta_label),
                cta_url = COALESCE($6, cta_url),
                position = COALESCE($7, position),
                is_active = COALESCE($8, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {HERO_COLUMNS}"
        );
        sqlx::query_as::<_, HeroBanner>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_url)
            .bind(&input.cta_label)
            .bind(&input.cta_url)
            .bind(input.position)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hero_banners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// About sections
// ---------------------------------------------------------------------------

const ABOUT_COLUMNS: &str =
    "id, heading, body, image_url, position, is_active, created_at, updated_at";

/// Provides CRUD operations for about sections.
pub struct AboutSectionRepo;

impl AboutSectionRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateAboutSection,
    ) -> Result<AboutSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO about_sections (heading, body, image_url, position, is_active)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, TRUE))
             RETURNING {ABOUT_COLUMNS}"
        );
        sqlx::query_as::<_, AboutSection>(&query)
            .bind(&input.heading)
            .bind(&input.body)
            .bind(&input.image_url)
            .bind(input.position)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AboutSection>, sqlx::Error> {
        let query = format!("SELECT {ABOUT_COLUMNS} FROM about_sections WHERE id = $1");
        sqlx::query_as::<_, AboutSection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AboutSection>, sqlx::Error> {
        let query = format!(
            "SELECT {ABOUT_COLUMNS} FROM about_sections
             ORDER BY position ASC, id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, AboutSection>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM about_sections")
            .fetch_one(pool)
            .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<AboutSection>, sqlx::Error> {
        let query = format!(
            "SELECT {ABOUT_COLUMNS} FROM about_sections
             WHERE is_active ORDER BY position ASC, id ASC"
        );
        sqlx::query_as::<_, AboutSection>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAboutSection,
    ) -> Result<Option<AboutSection>, sqlx::Error> {
        let query = format!(
            "UPDATE about_sections SET
                heading = COALESCE($2, heading),
                body = COALESCE($3, body),
                image_url = COALESCE($4, image_url),
                position = COALESCE($5, position),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {ABOUT_COLUMNS}"
        );
        sqlx::query_as::<_, AboutSection>(&query)
            .bind(id)
            .bind(&input.heading)
            .bind(&input.body)
            .bind(&input.image_url)
            .bind(input.position)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM about_sections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Core values
// ---------------------------------------------------------------------------

const VALUE_COLUMNS: &str =
    "id, title, description, icon, position, is_active, created_at, updated_at";

/// Provides CRUD operations for core values.
pub struct CoreValueRepo;

impl CoreValueRepo {
    pub async fn create(pool: &PgPool, input: &CreateCoreValue) -> Result<CoreValue, sqlx::Error> {
        let query = format!(
            "INSERT INTO core_values (title, description, icon, position, is_active)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, TRUE))
             RETURNING {VALUE_COLUMNS}"
        );
        sqlx::query_as::<_, CoreValue>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.position)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CoreValue>, sqlx::Error> {
        let query = format!("SELECT {VALUE_COLUMNS} FROM core_values WHERE id = $1");
        sqlx::query_as::<_, CoreValue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<CoreValue>, sqlx::Error> {
        let query = format!(
            "SELECT {VALUE_COLUMNS} FROM core_values
             ORDER BY position ASC, id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, CoreValue>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM core_values")
            .fetch_one(pool)
            .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<CoreValue>, sqlx::Error> {
        let query = format!(
            "SELECT {VALUE_COLUMNS} FROM core_values
             WHERE is_active ORDER BY position ASC, id ASC"
        );
        sqlx::query_as::<_, CoreValue>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCoreValue,
    ) -> Result<Option<CoreValue>, sqlx::Error> {
        let query = format!(
            "UPDATE core_values SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                icon = COALESCE($4, icon),
                position = COALESCE($5, position),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {VALUE_COLUMNS}"
        );
        sqlx::query_as::<_, CoreValue>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.position)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM core_values WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Media centre
// ---------------------------------------------------------------------------

const MEDIA_COLUMNS: &str = "id, title, kind, url, thumbnail_url, published_at, is_active, \
     created_at, updated_at";

/// Provides CRUD operations for media centre items.
pub struct MediaItemRepo;

impl MediaItemRepo {
    pub async fn create(pool: &PgPool, input: &CreateMediaItem) -> Result<MediaItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO media_items (title, kind, url, thumbnail_url, published_at, is_active)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE))
             RETURNING {MEDIA_COLUMNS}"
        );
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(&input.title)
            .bind(&input.kind)
            .bind(&input.url)
            .bind(&input.thumbnail_url)
            .bind(input.published_at)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MediaItem>, sqlx::Error> {
        let query = format!("SELECT {MEDIA_COLUMNS} FROM media_items WHERE id = $1");
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List media items matching the optional title search, newest first.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MediaItem>, sqlx::Error> {
        let query = format!(
            "SELECT {MEDIA_COLUMNS} FROM media_items
             WHERE {TITLE_FILTER}
             ORDER BY published_at DESC NULLS LAST, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(search)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM media_items WHERE {TITLE_FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(search)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMediaItem,
    ) -> Result<Option<MediaItem>, sqlx::Error> {
        let query = format!(
            "UPDATE media_items SET
                title = COALESCE($2, title),
                kind = COALESCE($3, kind),
                url = COALESCE($4, url),
                thumbnail_url = COALESCE($5, thumbnail_url),
                published_at = COALESCE($6, published_at),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {MEDIA_COLUMNS}"
        );
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.kind)
            .bind(&input.url)
            .bind(&input.thumbnail_url)
            .bind(input.published_at)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

const EVENT_COLUMNS: &str = "id, title, description, location, starts_at, ends_at, image_url, \
     is_active, created_at, updated_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (title, description, location, starts_at, ends_at, image_url, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, TRUE))
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events matching the optional title search, soonest first.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE {TITLE_FILTER}
             ORDER BY starts_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(search)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM events WHERE {TITLE_FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(search)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                location = COALESCE($4, location),
                starts_at = COALESCE($5, starts_at),
                ends_at = COALESCE($6, ends_at),
                image_url = COALESCE($7, image_url),
                is_active = COALESCE($8, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

const ANNOUNCEMENT_COLUMNS: &str =
    "id, title, body, published_at, is_active, created_at, updated_at";

/// Provides CRUD operations for announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateAnnouncement,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements (title, body, published_at, is_active)
             VALUES ($1, $2, $3, COALESCE($4, TRUE))
             RETURNING {ANNOUNCEMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .bind(input.published_at)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!("SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements WHERE id = $1");
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List announcements matching the optional title search, newest first.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!(
            "SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements
             WHERE {TITLE_FILTER}
             ORDER BY published_at DESC NULLS LAST, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(search)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM announcements WHERE {TITLE_FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(search)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnnouncement,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!(
            "UPDATE announcements SET
                title = COALESCE($2, title),
                body = COALESCE($3, body),
                published_at = COALESCE($4, published_at),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {ANNOUNCEMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(input.published_at)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
