use axum::{response::IntoResponse, Json};
use serde::Serialize;

use super::Paginated;

/// Success envelope: `{ "data": T }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl ApiResponse<&'static str> {
    /// Acknowledgement returned by delete and logout endpoints
    pub fn ok() -> Self {
        Self { data: "OK" }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

impl<T: Serialize> IntoResponse for Paginated<T> {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
