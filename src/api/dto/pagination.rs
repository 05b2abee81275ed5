//! Pagination request parameters and the paginated response envelope.

use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// Page returned when `page` is absent.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `pageSize` is absent.
pub const DEFAULT_PAGE_SIZE: i64 = 25;

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Pagination parameters sent by a client to a listing endpoint.
///
/// Accepted both as a JSON body and as a query string (`?page=2&pageSize=50`).
/// Absent fields fall back to [`DEFAULT_PAGE`] and [`DEFAULT_PAGE_SIZE`].
///
/// Deserialization does not bound-check: `page = 0` parses fine and is only
/// rejected by [`validate`](Validate::validate) or
/// [`validate_and_get_offset_limit`](Self::validate_and_get_offset_limit),
/// which list handlers are expected to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PagedRequest {
    /// 1-based page index.
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: i64,

    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, message = "Page size must be at least 1"))]
    pub page_size: i64,
}

impl Default for PagedRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagedRequest {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Validates the parameters against `max_page_size` and converts them to
    /// a database offset/limit pair.
    ///
    /// # Validation
    ///
    /// - `page` must be >= 1
    /// - `pageSize` must be between 1 and `max_page_size`
    ///
    /// Out-of-range values are rejected, never clamped.
    ///
    /// # Returns
    ///
    /// `(offset, limit)` tuple for SQL queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] describing the first offending field.
    pub fn validate_and_get_offset_limit(
        &self,
        max_page_size: i64,
    ) -> Result<(i64, i64), AppError> {
        if self.page < 1 {
            tracing::debug!(page = self.page, "Rejected pagination: page below 1");
            return Err(AppError::bad_request(
                "Page must be at least 1",
                json!({ "page": self.page }),
            ));
        }

        if self.page_size < 1 || self.page_size > max_page_size {
            tracing::debug!(
                page_size = self.page_size,
                max_page_size,
                "Rejected pagination: page size out of range"
            );
            return Err(AppError::bad_request(
                format!("Page size must be between 1 and {max_page_size}"),
                json!({ "pageSize": self.page_size, "maxPageSize": max_page_size }),
            ));
        }

        let offset = (self.page - 1).checked_mul(self.page_size).ok_or_else(|| {
            AppError::bad_request("Page is too large", json!({ "page": self.page }))
        })?;

        Ok((offset, self.page_size))
    }
}

/// Pagination metadata for list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

/// One page of a listing together with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub pagination: PaginationMeta,
    pub items: Vec<T>,
}

impl<T> PagedResponse<T> {
    /// Wraps a page of `items` fetched for `request`.
    ///
    /// `total_pages` is the ceiling of `total_items / page_size`, and 0 for an
    /// empty listing.
    pub fn new(items: Vec<T>, request: &PagedRequest, total_items: i64) -> Self {
        let total_pages = if request.page_size > 0 && total_items > 0 {
            (total_items - 1) / request.page_size + 1
        } else {
            0
        };

        Self {
            pagination: PaginationMeta {
                page: request.page,
                page_size: request.page_size,
                total_items,
                total_pages,
            },
            items,
        }
    }
}
