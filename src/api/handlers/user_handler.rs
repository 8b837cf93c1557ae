//! User handlers: registration, login and the current user's profile.

use axum::{
    extract::{Extension, State},
    routing::{get, post},
    Router,
};

use crate::api::extractors::AppJson;
use crate::api::AppState;
use crate::domain::{
    LoginUserRequest, RegisterUserRequest, UpdateUserRequest, User, UserResponse,
};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Routes reachable without a token
pub fn public_user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route("/users/login", post(login))
}

/// Routes acting on the authenticated user
pub fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users/current",
        get(get_current).patch(update_current).delete(logout),
    )
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "User registered", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterUserRequest>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state.auth_service.register(payload).await?;
    Ok(ApiResponse::new(user))
}

/// Login and receive an API token
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "Users",
    request_body = LoginUserRequest,
    responses(
        (status = 200, description = "Logged in, token included", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Username or password is wrong")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginUserRequest>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state.auth_service.login(payload).await?;
    Ok(ApiResponse::new(user))
}

/// Get the current user
#[utoipa::path(
    get,
    path = "/api/users/current",
    tag = "Users",
    security(("api_token" = [])),
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_current(
    Extension(user): Extension<User>,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state.user_service.get_current(&user).await?;
    Ok(ApiResponse::new(user))
}

/// Update the current user's name and/or password
#[utoipa::path(
    patch,
    path = "/api/users/current",
    tag = "Users",
    security(("api_token" = [])),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_current(
    Extension(user): Extension<User>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateUserRequest>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state.user_service.update_current(&user, payload).await?;
    Ok(ApiResponse::new(user))
}

/// Logout, invalidating the current token
#[utoipa::path(
    delete,
    path = "/api/users/current",
    tag = "Users",
    security(("api_token" = [])),
    responses(
        (status = 200, description = "Logged out", body = String, example = json!({"data": "OK"})),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn logout(
    Extension(user): Extension<User>,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<&'static str>> {
    state.auth_service.logout(&user).await?;
    Ok(ApiResponse::ok())
}
