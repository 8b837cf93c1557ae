//! Unit of Work - Centralized repository access over one connection pool.
//!
//! Services depend on the `UnitOfWork` trait rather than on concrete
//! stores, so tests can swap in mocked repositories.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    AddressRepository, AddressStore, ContactRepository, ContactStore, UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get contact repository
    fn contacts(&self) -> Arc<dyn ContactRepository>;

    /// Get address repository
    fn addresses(&self) -> Arc<dyn AddressRepository>;
}

/// Concrete implementation of UnitOfWork backed by SeaORM stores
pub struct Persistence {
    user_repo: Arc<UserStore>,
    contact_repo: Arc<ContactStore>,
    address_repo: Arc<AddressStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            contact_repo: Arc::new(ContactStore::new(db.clone())),
            address_repo: Arc::new(AddressStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn contacts(&self) -> Arc<dyn ContactRepository> {
        self.contact_repo.clone()
    }

    fn addresses(&self) -> Arc<dyn AddressRepository> {
        self.address_repo.clone()
    }
}
