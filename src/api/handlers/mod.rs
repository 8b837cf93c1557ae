//! HTTP request handlers.

pub mod address_handler;
pub mod contact_handler;
pub mod user_handler;

pub use address_handler::address_routes;
pub use contact_handler::contact_routes;
pub use user_handler::{public_user_routes, user_routes};
