//! User service - profile of the authenticated user.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{Password, UpdateUserRequest, User, UserResponse};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Profile of the authenticated user
    async fn get_current(&self, user: &User) -> AppResult<UserResponse>;

    /// Overwrite the provided fields of the authenticated user
    async fn update_current(&self, user: &User, request: UpdateUserRequest)
        -> AppResult<UserResponse>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_current(&self, user: &User) -> AppResult<UserResponse> {
        Ok(UserResponse::from(user.clone()))
    }

    async fn update_current(
        &self,
        user: &User,
        request: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        request.validate()?;

        let password_hash = match request.password {
            Some(password) => Some(Password::new(&password)?.into_string()),
            None => None,
        };

        let updated = self
            .uow
            .users()
            .update(user.id, request.name, password_hash)
            .await?;

        Ok(UserResponse::from(updated))
    }
}
