//! Reservation entity model and DTOs.
//!
//! List responses embed a [`UserSummary`] so clients can label a
//! reservation by the reserving user without a second lookup.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use showroom_core::status::StatusId;
use showroom_core::types::{DbId, Timestamp};

/// A reservation row from the `reservations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub car_id: DbId,
    pub user_id: DbId,
    pub scheduled_at: Timestamp,
    pub status_id: StatusId,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The slice of a user embedded in reservation responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// A reservation joined with its user, as returned by list/get endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationWithUser {
    pub id: DbId,
    pub car_id: DbId,
    pub user_id: DbId,
    pub scheduled_at: Timestamp,
    pub status_id: StatusId,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub user: UserSummary,
}

/// Flat join row backing [`ReservationWithUser`].
#[derive(Debug, Clone, FromRow)]
pub struct ReservationJoinRow {
    pub id: DbId,
    pub car_id: DbId,
    pub user_id: DbId,
    pub scheduled_at: Timestamp,
    pub status_id: StatusId,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub user_name: String,
    pub user_email: String,
}

impl From<ReservationJoinRow> for ReservationWithUser {
    fn from(row: ReservationJoinRow) -> Self {
        Self {
            id: row.id,
            car_id: row.car_id,
            user_id: row.user_id,
            scheduled_at: row.scheduled_at,
            status_id: row.status_id,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
            user: UserSummary {
                id: row.user_id,
                name: row.user_name,
                email: row.user_email,
            },
        }
    }
}

/// DTO for creating a new reservation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservation {
    pub car_id: DbId,
    pub user_id: DbId,
    pub scheduled_at: Timestamp,
    /// Defaults to 1 (Pending) if omitted.
    pub status_id: Option<StatusId>,
    pub notes: Option<String>,
}

/// DTO for updating an existing reservation. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReservation {
    pub scheduled_at: Option<Timestamp>,
    pub status_id: Option<StatusId>,
    pub notes: Option<String>,
}
