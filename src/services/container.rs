//! Service container - builds every service over one shared Unit of Work.

use std::sync::Arc;

use super::{
    AddressManager, AddressService, AuthService, Authenticator, ContactManager, ContactService,
    UserManager, UserService,
};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get contact service
    fn contacts(&self) -> Arc<dyn ContactService>;

    /// Get address service
    fn addresses(&self) -> Arc<dyn AddressService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    contact_service: Arc<dyn ContactService>,
    address_service: Arc<dyn AddressService>,
}

impl Services {
    /// Create a service container from already constructed services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        contact_service: Arc<dyn ContactService>,
        address_service: Arc<dyn AddressService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            contact_service,
            address_service,
        }
    }

    /// Create the service container over a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self::new(
            Arc::new(Authenticator::new(uow.clone())),
            Arc::new(UserManager::new(uow.clone())),
            Arc::new(ContactManager::new(uow.clone())),
            Arc::new(AddressManager::new(uow)),
        )
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn contacts(&self) -> Arc<dyn ContactService> {
        self.contact_service.clone()
    }

    fn addresses(&self) -> Arc<dyn AddressService> {
        self.address_service.clone()
    }
}
