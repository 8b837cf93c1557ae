//! Contact domain entity and request/response types.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::types::PaginationParams;

/// Digits, spaces and the usual `+ - ( )` separators
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+()\- ]*$").expect("phone pattern is a valid regex"));

/// Contact domain entity, always owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable contact fields, used for both create and full-replace update
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "first_name must be between 1 and 100 characters"))]
    #[schema(example = "Ilham")]
    pub first_name: String,
    #[validate(length(max = 100, message = "last_name must be at most 100 characters"))]
    #[schema(example = "Rh")]
    pub last_name: Option<String>,
    #[validate(
        email(message = "email must be a valid email address"),
        length(max = 100, message = "email must be at most 100 characters")
    )]
    #[schema(example = "ilham@example.com")]
    pub email: Option<String>,
    #[validate(
        length(max = 20, message = "phone must be at most 20 characters"),
        regex(path = *PHONE_PATTERN, message = "phone may only contain digits, spaces and + - ( )")
    )]
    #[schema(example = "06886945")]
    pub phone: Option<String>,
}

/// Contact search query: optional filters plus paging
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchContactRequest {
    /// Matches first or last name (case-insensitive substring)
    pub name: Option<String>,
    /// Case-insensitive substring of the email
    pub email: Option<String>,
    /// Substring of the phone number
    pub phone: Option<String>,
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: u64,
    /// Page size, between 1 and 100
    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 100, message = "size must be between 1 and 100"))]
    pub size: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for SearchContactRequest {
    fn default() -> Self {
        Self {
            name: None,
            email: None,
            phone: None,
            page: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchContactRequest {
    /// Filters that were actually supplied; blank values are ignored
    pub fn filter(&self) -> ContactFilter {
        fn present(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        ContactFilter {
            name: present(&self.name),
            email: present(&self.email),
            phone: present(&self.phone),
        }
    }

    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            size: self.size,
        }
    }
}

/// Normalized search filters handed to the repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Contact response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Ilham")]
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            phone: contact.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_PAGE_SIZE;

    fn request() -> ContactRequest {
        ContactRequest {
            first_name: "Ilham".to_string(),
            last_name: Some("Rh".to_string()),
            email: Some("ilham@example.com".to_string()),
            phone: Some("06886945".to_string()),
        }
    }

    #[test]
    fn test_valid_contact() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_only_first_name_is_required() {
        let contact = ContactRequest {
            first_name: "Ilham".to_string(),
            last_name: None,
            email: None,
            phone: None,
        };
        assert!(contact.validate().is_ok());
    }

    #[test]
    fn test_invalid_contact_reports_each_field() {
        let contact = ContactRequest {
            first_name: String::new(),
            last_name: Some(String::new()),
            email: Some("ilham".to_string()),
            phone: Some("06886945068869450688694506886945".to_string()),
        };

        let errors = contact.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
        assert!(!fields.contains_key("last_name"));
    }

    #[test]
    fn test_phone_pattern() {
        let mut contact = request();
        contact.phone = Some("+62 (812) 555-01".to_string());
        assert!(contact.validate().is_ok());

        contact.phone = Some("call me".to_string());
        assert!(contact.validate().is_err());
    }

    #[test]
    fn test_search_defaults() {
        let search: SearchContactRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(search.page, 1);
        assert_eq!(search.size, 10);
        assert_eq!(search.filter(), ContactFilter::default());
        assert!(search.validate().is_ok());
    }

    #[test]
    fn test_search_paging_bounds() {
        let mut search = SearchContactRequest {
            page: 0,
            ..SearchContactRequest::default()
        };
        assert!(search.validate().is_err());

        search.page = 1;
        search.size = 0;
        assert!(search.validate().is_err());

        search.size = MAX_PAGE_SIZE;
        assert!(search.validate().is_ok());

        search.size = MAX_PAGE_SIZE + 1;
        assert!(search.validate().is_err());
    }

    #[test]
    fn test_search_filter_ignores_blank_values() {
        let search = SearchContactRequest {
            name: Some("  ".to_string()),
            email: Some(" ilham ".to_string()),
            ..SearchContactRequest::default()
        };

        let filter = search.filter();
        assert_eq!(filter.name, None);
        assert_eq!(filter.email.as_deref(), Some("ilham"));
        assert_eq!(filter.phone, None);
    }
}
