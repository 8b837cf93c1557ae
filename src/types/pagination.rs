//! Pagination types for search endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Validated page request (1-indexed page, positive size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u64,
    pub size: u64,
}

impl PaginationParams {
    /// Zero-based page index as used by SeaORM paginators
    pub fn page_index(&self) -> u64 {
        self.page.saturating_sub(1)
    }
}

/// Paged response body: `{ "data": [...], "paging": {...} }`
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub paging: Paging,
}

/// Paging metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Paging {
    /// Requested page (1-indexed)
    pub current_page: u64,
    /// Number of pages needed to hold every matching row
    pub total_page: u64,
    /// Requested page size
    pub size: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response from one page of rows and the total match count
    pub fn new(data: Vec<T>, params: PaginationParams, total: u64) -> Self {
        let total_page = if total == 0 || params.size == 0 {
            0
        } else {
            total.div_ceil(params.size)
        };

        Self {
            data,
            paging: Paging {
                current_page: params.page,
                total_page,
                size: params.size,
            },
        }
    }

    /// Transform every row, keeping the paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            paging: self.paging,
        }
    }
}
