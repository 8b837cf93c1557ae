//! Authentication service - registration, login, logout and token lookup.
//!
//! Tokens are opaque random UUID strings stored on the user row. They do not
//! expire; logout clears them.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{LoginUserRequest, Password, RegisterUserRequest, User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, request: RegisterUserRequest) -> AppResult<UserResponse>;

    /// Verify credentials and issue a fresh token
    async fn login(&self, request: LoginUserRequest) -> AppResult<UserResponse>;

    /// Clear the user's token
    async fn logout(&self, user: &User) -> AppResult<()>;

    /// Resolve a token to its user
    async fn authenticate(&self, token: &str) -> AppResult<User>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, request: RegisterUserRequest) -> AppResult<UserResponse> {
        request.validate()?;

        if self
            .uow
            .users()
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Username"));
        }

        let password_hash = Password::new(&request.password)?.into_string();
        let user = self
            .uow
            .users()
            .create(request.username, password_hash, request.name)
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(UserResponse::from(user))
    }

    async fn login(&self, request: LoginUserRequest) -> AppResult<UserResponse> {
        request.validate()?;

        let user = self.uow.users().find_by_username(&request.username).await?;

        // Verify against a dummy hash for unknown usernames so both paths cost the same
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.as_str()),
            None => Password::dummy(),
        };
        let password_valid = stored.verify(&request.password);

        let user = match user {
            Some(user) if password_valid => user,
            _ => return Err(AppError::InvalidCredentials),
        };

        let token = Uuid::new_v4().to_string();
        let user = self
            .uow
            .users()
            .set_token(user.id, Some(token.clone()))
            .await?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(UserResponse {
            token: Some(token),
            ..UserResponse::from(user)
        })
    }

    async fn logout(&self, user: &User) -> AppResult<()> {
        self.uow.users().set_token(user.id, None).await?;
        tracing::info!(user_id = %user.id, "User logged out");
        Ok(())
    }

    async fn authenticate(&self, token: &str) -> AppResult<User> {
        if token.is_empty() {
            return Err(AppError::Unauthorized);
        }

        self.uow
            .users()
            .find_by_token(token)
            .await?
            .ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use crate::services::test_support::{test_user, TestUnitOfWork};

    fn register_request() -> RegisterUserRequest {
        RegisterUserRequest {
            username: "khannedy".to_string(),
            password: "rahasia123".to_string(),
            name: "Eko".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_username() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(test_user("khannedy"))));
        users.expect_create().never();

        let service = Authenticator::new(Arc::new(TestUnitOfWork::new().with_users(users)));
        let result = service.register(register_request()).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|username, hash, name| {
                username == "khannedy" && name == "Eko" && Password::from_hash(hash.as_str()).verify("rahasia123")
            })
            .times(1)
            .returning(|username, hash, name| {
                Ok(User::new(Uuid::new_v4(), username, hash, name))
            });

        let service = Authenticator::new(Arc::new(TestUnitOfWork::new().with_users(users)));
        let response = service.register(register_request()).await.unwrap();

        assert_eq!(response.username, "khannedy");
        assert!(response.token.is_none());
    }

    #[tokio::test]
    async fn test_register_validates_before_lookup() {
        let service = Authenticator::new(Arc::new(TestUnitOfWork::new()));
        let result = service
            .register(RegisterUserRequest {
                username: String::new(),
                password: "rahasia123".to_string(),
                name: "Eko".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|username| {
            let mut user = test_user(username);
            user.password_hash = Password::new("rahasia123").unwrap().into_string();
            Ok(Some(user))
        });
        users.expect_set_token().never();

        let service = Authenticator::new(Arc::new(TestUnitOfWork::new().with_users(users)));
        let result = service
            .login(LoginUserRequest {
                username: "khannedy".to_string(),
                password: "salah12345".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));

        let service = Authenticator::new(Arc::new(TestUnitOfWork::new().with_users(users)));
        let result = service
            .login(LoginUserRequest {
                username: "ghost".to_string(),
                password: "rahasia123".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_issues_token() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|username| {
            let mut user = test_user(username);
            user.password_hash = Password::new("rahasia123").unwrap().into_string();
            Ok(Some(user))
        });
        users
            .expect_set_token()
            .withf(|_, token| token.is_some())
            .times(1)
            .returning(|_, token| {
                let mut user = test_user("khannedy");
                user.token = token;
                Ok(user)
            });

        let service = Authenticator::new(Arc::new(TestUnitOfWork::new().with_users(users)));
        let response = service
            .login(LoginUserRequest {
                username: "khannedy".to_string(),
                password: "rahasia123".to_string(),
            })
            .await
            .unwrap();

        let token = response.token.unwrap();
        assert!(Uuid::parse_str(&token).is_ok());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_token() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_token().returning(|_| Ok(None));

        let service = Authenticator::new(Arc::new(TestUnitOfWork::new().with_users(users)));

        assert!(matches!(
            service.authenticate("nope").await,
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(
            service.authenticate("").await,
            Err(AppError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let user = test_user("khannedy");
        let id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_set_token()
            .withf(move |user_id, token| *user_id == id && token.is_none())
            .times(1)
            .returning(|_, _| Ok(test_user("khannedy")));

        let service = Authenticator::new(Arc::new(TestUnitOfWork::new().with_users(users)));
        service.logout(&user).await.unwrap();
    }
}
