//! Sales lead request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{constants::MAX_NAME_LENGTH, utils::validation::validate_not_blank};

/// Create or update sales lead request; the phone format is checked by the service
#[derive(Debug, Deserialize, Validate)]
pub struct SalesLeadRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 32), custom(function = "validate_not_blank"))]
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_checked() {
        let mut request = SalesLeadRequest {
            name: "Kiran Rao".to_string(),
            email: "kiran@example.com".to_string(),
            phone: "+91 98200 12345".to_string(),
        };
        assert!(request.validate().is_ok());

        request.email = "kiran".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_blank_phone_rejected() {
        let request = SalesLeadRequest {
            name: "Kiran Rao".to_string(),
            email: "kiran@example.com".to_string(),
            phone: "   ".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }
}
