//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and reach repositories through the Unit of Work.

mod address_service;
mod auth_service;
mod contact_service;
pub mod container;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use address_service::{AddressManager, AddressService};
pub use auth_service::{AuthService, Authenticator};
pub use contact_service::{ContactManager, ContactService};
pub use user_service::{UserManager, UserService};

/// Fixtures and a mock-backed Unit of Work shared by service tests.
#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use chrono::Utc;
    use uuid::Uuid;

    use crate::domain::{Address, Contact, Password, User};
    use crate::infra::{
        AddressRepository, ContactRepository, MockAddressRepository, MockContactRepository,
        MockUserRepository, UnitOfWork, UserRepository,
    };

    pub const TEST_PASSWORD: &str = "rahasia123";

    /// Unit of Work whose repositories are mocks; unset ones reject every call
    pub struct TestUnitOfWork {
        users: Arc<MockUserRepository>,
        contacts: Arc<MockContactRepository>,
        addresses: Arc<MockAddressRepository>,
    }

    impl TestUnitOfWork {
        pub fn new() -> Self {
            Self {
                users: Arc::new(MockUserRepository::new()),
                contacts: Arc::new(MockContactRepository::new()),
                addresses: Arc::new(MockAddressRepository::new()),
            }
        }

        pub fn with_users(mut self, users: MockUserRepository) -> Self {
            self.users = Arc::new(users);
            self
        }

        pub fn with_contacts(mut self, contacts: MockContactRepository) -> Self {
            self.contacts = Arc::new(contacts);
            self
        }

        pub fn with_addresses(mut self, addresses: MockAddressRepository) -> Self {
            self.addresses = Arc::new(addresses);
            self
        }
    }

    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        fn contacts(&self) -> Arc<dyn ContactRepository> {
            self.contacts.clone()
        }

        fn addresses(&self) -> Arc<dyn AddressRepository> {
            self.addresses.clone()
        }
    }

    /// A registered user whose password is `TEST_PASSWORD`
    pub fn test_user(username: &str) -> User {
        let hash = Password::new(TEST_PASSWORD)
            .expect("test password hashes")
            .into_string();
        User::new(Uuid::new_v4(), username.to_string(), hash, "Test User".to_string())
    }

    pub fn test_contact(user_id: Uuid) -> Contact {
        let now = Utc::now();
        Contact {
            id: Uuid::new_v4(),
            user_id,
            first_name: "Ilham".to_string(),
            last_name: Some("Rh".to_string()),
            email: Some("ilham@example.com".to_string()),
            phone: Some("06886945".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn test_address(contact_id: Uuid) -> Address {
        let now = Utc::now();
        Address {
            id: Uuid::new_v4(),
            contact_id,
            street: Some("Jalan Belum Ada".to_string()),
            city: Some("Jakarta".to_string()),
            province: Some("DKI Jakarta".to_string()),
            country: "Indonesia".to_string(),
            postal_code: "11111".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
