//! Car entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use showroom_core::status::StatusId;
use showroom_core::types::{DbId, Timestamp};

/// A car row from the `cars` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Car {
    pub id: DbId,
    pub name: String,
    pub brand: String,
    pub model_year: i32,
    /// Whole currency units.
    pub price: i64,
    /// Showroom branch the car is listed at, e.g. `riyadh`.
    pub branch: String,
    pub status_id: StatusId,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new car.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCar {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub brand: String,
    pub model_year: i32,
    #[validate(range(min = 0))]
    pub price: i64,
    #[validate(length(min = 1, max = 100))]
    pub branch: String,
    /// Defaults to 1 (Available) if omitted.
    pub status_id: Option<StatusId>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for updating an existing car. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCar {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub brand: Option<String>,
    pub model_year: Option<i32>,
    #[validate(range(min = 0))]
    pub price: Option<i64>,
    pub branch: Option<String>,
    pub status_id: Option<StatusId>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
