//! Address domain entity and request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Address domain entity, always attached to one contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub contact_id: Uuid,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable address fields, used for both create and full-replace update.
///
/// Required fields default to empty so a missing one surfaces as a field
/// error, after the parent contact has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct AddressRequest {
    #[validate(length(max = 255, message = "street must be at most 255 characters"))]
    #[schema(example = "Jalan Belum Ada")]
    pub street: Option<String>,
    #[validate(length(max = 100, message = "city must be at most 100 characters"))]
    #[schema(example = "Jakarta")]
    pub city: Option<String>,
    #[validate(length(max = 100, message = "province must be at most 100 characters"))]
    #[schema(example = "DKI Jakarta")]
    pub province: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "country must be between 1 and 100 characters"))]
    #[schema(example = "Indonesia")]
    pub country: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 10, message = "postal_code must be between 1 and 10 characters"))]
    #[schema(example = "11111")]
    pub postal_code: String,
}

/// Address response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AddressResponse {
    pub id: Uuid,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            street: address.street,
            city: address.city,
            province: address.province,
            country: address.country,
            postal_code: address.postal_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_and_postal_code_required() {
        let address = AddressRequest {
            street: Some("Jalan Belum Ada".to_string()),
            city: None,
            province: None,
            country: String::new(),
            postal_code: String::new(),
        };

        let errors = address.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("country"));
        assert!(fields.contains_key("postal_code"));
        assert!(!fields.contains_key("street"));
    }

    #[test]
    fn test_missing_required_fields_are_field_errors() {
        let address: AddressRequest = serde_json::from_str(r#"{"street":"x"}"#).unwrap();

        let errors = address.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("country"));
        assert!(fields.contains_key("postal_code"));
    }

    #[test]
    fn test_postal_code_length() {
        let address = AddressRequest {
            street: None,
            city: None,
            province: None,
            country: "Indonesia".to_string(),
            postal_code: "12345678901".to_string(),
        };
        assert!(address.validate().is_err());
    }
}
