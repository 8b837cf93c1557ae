//! Shared types for the response envelope and paging.

mod pagination;
mod response;

pub use pagination::{Paginated, Paging, PaginationParams};
pub use response::ApiResponse;
