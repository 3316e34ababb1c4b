//! Client request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{constants::MAX_NAME_LENGTH, utils::validation::validate_not_blank};

/// Create or update client request
#[derive(Debug, Deserialize, Validate)]
pub struct ClientRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = "validate_not_blank"))]
    pub industry: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = "validate_not_blank"))]
    pub region: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> ClientRequest {
        ClientRequest {
            name: name.to_string(),
            industry: "Manufacturing".to_string(),
            region: "West".to_string(),
        }
    }

    #[test]
    fn test_whitespace_only_name_rejected() {
        assert!(request("Acme Textiles").validate().is_ok());
        assert!(request("  Acme  ").validate().is_ok());

        let errors = request("   ").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(request("\t\n").validate().is_err());
    }
}
