//! Page-number pagination math shared by the API and repository layers.
//!
//! List endpoints speak `?page=&limit=` with 1-based page numbers. The
//! response carries a [`Pagination`] block describing the full result set
//! so clients can decide whether another page exists (`page < pages`).

use serde::Serialize;

/// Default page size when the client does not specify a limit.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a requested page number to `1..`.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a requested limit to `1..=MAX_PAGE_SIZE`.
///
/// Returns [`DEFAULT_PAGE_SIZE`] for missing or non-positive values and
/// caps at [`MAX_PAGE_SIZE`].
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(l) if l >= 1 => l.min(MAX_PAGE_SIZE),
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// Pagination metadata for a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// 1-based page number of this response.
    pub page: i64,
    /// Page size used for the query.
    pub limit: i64,
    /// Total number of rows matching the filters.
    pub total: i64,
    /// Total number of pages (`ceil(total / limit)`, 0 when empty).
    pub pages: i64,
}

impl Pagination {
    /// Build pagination metadata from a clamped page/limit and a row count.
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let pages = if total <= 0 { 0 } else { (total + limit - 1) / limit };
        Self {
            page,
            limit,
            total,
            pages,
        }
    }

    /// The SQL OFFSET for this page.
    pub fn offset(page: i64, limit: i64) -> i64 {
        (page - 1) * limit
    }

    /// Whether a page after this one exists.
    pub fn has_more(&self) -> bool {
        self.page < self.pages
    }
}
