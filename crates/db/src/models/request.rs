//! Customer request entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use showroom_core::status::StatusId;
use showroom_core::types::{DbId, Timestamp};

/// A customer request row from the `requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Request {
    pub id: DbId,
    pub user_id: Option<DbId>,
    /// `test_drive`, `inquiry`, or `finance`.
    pub kind: String,
    pub subject: String,
    pub message: String,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRequest {
    pub user_id: Option<DbId>,
    #[validate(length(min = 1, max = 50))]
    pub kind: String,
    #[validate(length(min = 1, max = 300))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub message: String,
}

/// DTO for updating an existing request. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    pub subject: Option<String>,
    pub message: Option<String>,
    pub status_id: Option<StatusId>,
}
