//! Repository for the `requests` table.

use sqlx::PgPool;

use showroom_core::status::StatusId;
use showroom_core::types::DbId;

use crate::models::request::{CreateRequest, Request, UpdateRequest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, kind, subject, message, status_id, created_at, updated_at";

/// Filter predicate shared by `list` and `count`.
///
/// `$1` is an optional search term matched against the subject, `$2` an
/// optional status.
const FILTER: &str = "($1::text IS NULL OR subject ILIKE '%' || $1 || '%')
       AND ($2::smallint IS NULL OR status_id = $2)";

/// Provides CRUD operations for customer requests.
pub struct RequestRepo;

impl RequestRepo {
    /// Insert a new request, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRequest) -> Result<Request, sqlx::Error> {
        let query = format!(
            "INSERT INTO requests (user_id, kind, subject, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(input.user_id)
            .bind(&input.kind)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a request by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Request>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM requests WHERE id = $1");
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List requests matching the given filters, newest first.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        status_id: Option<StatusId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Request>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM requests
             WHERE {FILTER}
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(search)
            .bind(status_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count requests matching the given filters.
    pub async fn count(
        pool: &PgPool,
        search: Option<&str>,
        status_id: Option<StatusId>,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM requests WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(search)
            .bind(status_id)
            .fetch_one(pool)
            .await
    }

    /// Update a request. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRequest,
    ) -> Result<Option<Request>, sqlx::Error> {
        let query = format!(
            "UPDATE requests SET
                subject = COALESCE($2, subject),
                message = COALESCE($3, message),
                status_id = COALESCE($4, status_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(input.status_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a request by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
