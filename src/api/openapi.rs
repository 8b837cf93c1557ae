//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{address_handler, contact_handler, user_handler};
use crate::config::API_TOKEN_HEADER;
use crate::domain::{
    AddressRequest, AddressResponse, ContactRequest, ContactResponse, LoginUserRequest,
    RegisterUserRequest, UpdateUserRequest, UserResponse,
};
use crate::types::Paging;

/// OpenAPI documentation for the Contact API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact API",
        version = "0.1.0",
        description = "Manage users, their contacts and the contacts' addresses",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::register,
        user_handler::login,
        user_handler::get_current,
        user_handler::update_current,
        user_handler::logout,
        // Contact endpoints
        contact_handler::create,
        contact_handler::search,
        contact_handler::get_contact,
        contact_handler::update,
        contact_handler::remove,
        // Address endpoints
        address_handler::create,
        address_handler::list,
        address_handler::get_address,
        address_handler::update,
        address_handler::remove,
    ),
    components(
        schemas(
            RegisterUserRequest,
            LoginUserRequest,
            UpdateUserRequest,
            UserResponse,
            ContactRequest,
            ContactResponse,
            AddressRequest,
            AddressResponse,
            Paging,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Registration, login and the current user"),
        (name = "Contacts", description = "Contact management and search"),
        (name = "Addresses", description = "Addresses nested under a contact")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for the `X-API-TOKEN` header
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    API_TOKEN_HEADER,
                    "Token returned by POST /api/users/login",
                ))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/api/users/current"));
        assert!(paths.contains(&"/api/contacts/{contact_id}"));
        assert!(paths.contains(&"/api/contacts/{contact_id}/addresses/{address_id}"));
    }

    #[test]
    fn test_api_token_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("api_token"));
    }
}
