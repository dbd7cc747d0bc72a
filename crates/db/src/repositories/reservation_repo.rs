//! Repository for the `reservations` table.
//!
//! List and get queries join `users` so responses can embed the reserving
//! user's summary.

use sqlx::PgPool;

use showroom_core::status::StatusId;
use showroom_core::types::DbId;

use crate::models::reservation::{
    CreateReservation, Reservation, ReservationJoinRow, ReservationWithUser, UpdateReservation,
};

/// Column list for bare reservation rows.
const COLUMNS: &str = "id, car_id, user_id, scheduled_at, status_id, notes, created_at, updated_at";

/// Column list for user-joined rows.
const JOIN_COLUMNS: &str = "r.id, r.car_id, r.user_id, r.scheduled_at, r.status_id, r.notes, \
     r.created_at, r.updated_at, u.name AS user_name, u.email AS user_email";

/// Filter predicate shared by `list` and `count`.
///
/// `$1` is an optional search term matched against the reserving user's
/// name, `$2` an optional status, `$3` an optional car.
const FILTER: &str = "($1::text IS NULL OR u.name ILIKE '%' || $1 || '%')
       AND ($2::smallint IS NULL OR r.status_id = $2)
       AND ($3::bigint IS NULL OR r.car_id = $3)";

/// Provides CRUD operations for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a new reservation, returning the created row.
    ///
    /// If `status_id` is `None`, defaults to 1 (Pending). Foreign keys are
    /// checked by the caller so missing cars/users surface as 404 rather
    /// than a constraint violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReservation,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations (car_id, user_id, scheduled_at, status_id, notes)
             VALUES ($1, $2, $3, COALESCE($4, 1), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(input.car_id)
            .bind(input.user_id)
            .bind(input.scheduled_at)
            .bind(input.status_id)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a reservation by ID with its user summary.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ReservationWithUser>, sqlx::Error> {
        let query = format!(
            "SELECT {JOIN_COLUMNS} FROM reservations r
             JOIN users u ON u.id = r.user_id
             WHERE r.id = $1"
        );
        let row = sqlx::query_as::<_, ReservationJoinRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(ReservationWithUser::from))
    }

    /// List reservations matching the given filters, newest first.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        status_id: Option<StatusId>,
        car_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ReservationWithUser>, sqlx::Error> {
        let query = format!(
            "SELECT {JOIN_COLUMNS} FROM reservations r
             JOIN users u ON u.id = r.user_id
             WHERE {FILTER}
             ORDER BY r.created_at DESC, r.id DESC
             LIMIT $4 OFFSET $5"
        );
        let rows = sqlx::query_as::<_, ReservationJoinRow>(&query)
            .bind(search)
            .bind(status_id)
            .bind(car_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ReservationWithUser::from).collect())
    }

    /// Count reservations matching the given filters.
    pub async fn count(
        pool: &PgPool,
        search: Option<&str>,
        status_id: Option<StatusId>,
        car_id: Option<DbId>,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM reservations r
             JOIN users u ON u.id = r.user_id
             WHERE {FILTER}"
        );
        sqlx::query_scalar::<_, i64>(&query)
            .bind(search)
            .bind(status_id)
            .bind(car_id)
            .fetch_one(pool)
            .await
    }

    /// Update a reservation. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReservation,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!(
            "UPDATE reservations SET
                scheduled_at = COALESCE($2, scheduled_at),
                status_id = COALESCE($3, status_id),
                notes = COALESCE($4, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(input.scheduled_at)
            .bind(input.status_id)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a reservation by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
