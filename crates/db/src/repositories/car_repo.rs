//! Repository for the `cars` table.

use sqlx::PgPool;

use showroom_core::status::StatusId;
use showroom_core::types::DbId;

use crate::models::car::{Car, CreateCar, UpdateCar};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, brand, model_year, price, branch, status_id, description, \
     image_url, created_at, updated_at";

/// Filter predicate shared by `list` and `count`.
///
/// `$1` is an optional search term matched against name and brand, `$2` an
/// optional branch, `$3` an optional status.
const FILTER: &str = "($1::text IS NULL OR name ILIKE '%' || $1 || '%' OR brand ILIKE '%' || $1 || '%')
       AND ($2::text IS NULL OR branch = $2)
       AND ($3::smallint IS NULL OR status_id = $3)";

/// Provides CRUD operations for cars.
pub struct CarRepo;

impl CarRepo {
    /// Insert a new car, returning the created row.
    ///
    /// If `status_id` is `None`, defaults to 1 (Available).
    pub async fn create(pool: &PgPool, input: &CreateCar) -> Result<Car, sqlx::Error> {
        let query = format!(
            "INSERT INTO cars (name, brand, model_year, price, branch, status_id, description, image_url)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 1), $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(&input.name)
            .bind(&input.brand)
            .bind(input.model_year)
            .bind(input.price)
            .bind(&input.branch)
            .bind(input.status_id)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a car by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = $1");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cars matching the given filters, newest first.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        branch: Option<&str>,
        status_id: Option<StatusId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cars
             WHERE {FILTER}
             ORDER BY created_at DESC, id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(search)
            .bind(branch)
            .bind(status_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count cars matching the given filters.
    pub async fn count(
        pool: &PgPool,
        search: Option<&str>,
        branch: Option<&str>,
        status_id: Option<StatusId>,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM cars WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(search)
            .bind(branch)
            .bind(status_id)
            .fetch_one(pool)
            .await
    }

    /// Update a car. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCar,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET
                name = COALESCE($2, name),
                brand = COALESCE($3, brand),
                model_year = COALESCE($4, model_year),
                price = COALESCE($5, price),
                branch = COALESCE($6, branch),
                status_id = COALESCE($7, status_id),
                description = COALESCE($8, description),
                image_url = COALESCE($9, image_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.brand)
            .bind(input.model_year)
            .bind(input.price)
            .bind(&input.branch)
            .bind(input.status_id)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a car by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
