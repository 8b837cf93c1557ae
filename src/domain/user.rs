//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    /// Opaque API token (None = logged out)
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new logged-out user
    pub fn new(id: Uuid, username: String, password_hash: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            password_hash,
            name,
            token: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "username must be between 1 and 100 characters"))]
    #[schema(example = "khannedy")]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 8, max = 100, message = "password must be between 8 and 100 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[schema(example = "Eko Khannedy")]
    pub name: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "username must be between 1 and 100 characters"))]
    #[schema(example = "khannedy")]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "password must be between 1 and 100 characters"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Current-user update request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[schema(example = "Eko Kurniawan")]
    pub name: Option<String>,
    #[validate(length(min = 8, max = 100, message = "password must be between 8 and 100 characters"))]
    pub password: Option<String>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "khannedy")]
    pub username: String,
    #[schema(example = "Eko Khannedy")]
    pub name: String,
    /// Only present in the login response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            name: user.name,
            token: None,
        }
    }
}
