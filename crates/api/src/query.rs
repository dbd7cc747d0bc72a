//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication. Values are clamped via
//! `showroom_core::pagination` before reaching the repository layer.

use serde::Deserialize;

use showroom_core::status::StatusId;
use showroom_core::types::DbId;

/// Generic list parameters (`?page=&limit=&search=`).
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

/// List parameters for `/cars` (`?branch=&status_id=` filters).
#[derive(Debug, Deserialize)]
pub struct CarListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub branch: Option<String>,
    pub status_id: Option<StatusId>,
}

/// List parameters for `/reservations` (`?status_id=&car_id=` filters).
#[derive(Debug, Deserialize)]
pub struct ReservationListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub status_id: Option<StatusId>,
    pub car_id: Option<DbId>,
}

/// List parameters for `/requests` (`?status_id=` filter).
#[derive(Debug, Deserialize)]
pub struct RequestListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub status_id: Option<StatusId>,
}

/// Normalize a search term: trim whitespace and drop empty strings so an
/// empty `?search=` behaves like no search at all.
pub fn normalize_search(search: &Option<String>) -> Option<&str> {
    search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
