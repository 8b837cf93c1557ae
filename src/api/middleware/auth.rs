//! Token authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::API_TOKEN_HEADER;
use crate::errors::AppError;

/// Resolve the `X-API-TOKEN` header to a user.
///
/// On success the `User` is inserted into the request extensions for
/// handlers to pick up with `Extension<User>`. A missing, empty or unknown
/// token short-circuits with 401 before the handler runs.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_owned();
    let token = request
        .headers()
        .get(API_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| {
            tracing::warn!(%path, "Missing API token");
            AppError::Unauthorized
        })?;

    let user = state.auth_service.authenticate(&token).await.map_err(|e| {
        tracing::warn!(%path, "Rejected API token");
        e
    })?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
