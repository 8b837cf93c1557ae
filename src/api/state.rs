//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    AddressService, AuthService, ContactService, ServiceContainer, Services, UserService,
};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub contact_service: Arc<dyn ContactService>,
    pub address_service: Arc<dyn AddressService>,
    /// Kept for the health check
    pub database: Database,
}

impl AppState {
    /// Build every service over the database's connection pool.
    pub fn from_database(database: Database) -> Self {
        let services = Services::from_connection(database.get_connection());
        Self::new(&services, database)
    }

    /// Create application state from an existing service container.
    pub fn new(services: &dyn ServiceContainer, database: Database) -> Self {
        Self {
            auth_service: services.auth(),
            user_service: services.users(),
            contact_service: services.contacts(),
            address_service: services.addresses(),
            database,
        }
    }
}
