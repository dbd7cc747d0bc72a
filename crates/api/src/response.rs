//! Shared response envelope types for API handlers.
//!
//! All API responses use the `{ "success": bool, "message": string,
//! "data": ... }` envelope. Use [`Envelope`] instead of ad-hoc
//! `serde_json::json!` to get compile-time type safety and consistent
//! serialization. List endpoints wrap their rows in [`PageData`], which
//! always names the row array `items`.

use serde::Serialize;

use showroom_core::pagination::Pagination;

/// Standard `{ "success": true, "message": ..., "data": ... }` envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// Build a success envelope around `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Paginated list payload: `{ "items": [...], "pagination": {...} }`.
///
/// The row array is always named `items`; clients are configured with
/// that key explicitly rather than guessing which `data` field holds
/// the list.
#[derive(Debug, Serialize)]
pub struct PageData<T: Serialize> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T: Serialize> PageData<T> {
    /// Assemble a page from rows and the query's pagination inputs.
    pub fn new(items: Vec<T>, page: i64, limit: i64, total: i64) -> Self {
        Self {
            items,
            pagination: Pagination::new(page, limit, total),
        }
    }
}
