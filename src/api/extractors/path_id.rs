use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Parse a path id. Anything that is not a UUID cannot name a row, so it is
/// reported as `<entity> is not found`.
pub fn parse_id(raw: &str, entity: &'static str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(entity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "Contact").unwrap(), id);
    }

    #[test]
    fn test_malformed_id_is_not_found() {
        assert!(matches!(
            parse_id("not-a-uuid", "Address"),
            Err(AppError::NotFound("Address"))
        ));
    }
}
