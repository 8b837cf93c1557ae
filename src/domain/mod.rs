//! Domain layer - Core business entities and request/response types
//!
//! Request types carry their validation rules declaratively through
//! `validator` derives; services run them before touching the store.

pub mod address;
pub mod contact;
pub mod password;
pub mod user;

pub use address::{Address, AddressRequest, AddressResponse};
pub use contact::{Contact, ContactFilter, ContactRequest, ContactResponse, SearchContactRequest};
pub use password::Password;
pub use user::{LoginUserRequest, RegisterUserRequest, UpdateUserRequest, User, UserResponse};
