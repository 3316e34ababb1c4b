//! User request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{
        MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH,
        MIN_USERNAME_LENGTH,
    },
    utils::validation::validate_not_blank,
};

/// Create user request; the role is given by id or by name
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = MIN_USERNAME_LENGTH, max = MAX_USERNAME_LENGTH))]
    pub username: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = "validate_not_blank"))]
    pub full_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,

    pub role_id: Option<Uuid>,
    pub role: Option<String>,
}

/// Update user request; an empty or absent password keeps the current one
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = "validate_not_blank"))]
    pub full_name: String,

    #[validate(length(min = MIN_USERNAME_LENGTH, max = MAX_USERNAME_LENGTH))]
    pub username: Option<String>,

    #[validate(length(max = MAX_PASSWORD_LENGTH))]
    pub password: Option<String>,

    pub role_id: Option<Uuid>,
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_validation() {
        let request: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "username": "asha",
            "full_name": "Asha Menon",
            "email": "asha@example.com",
            "password": "correct-horse",
        }))
        .unwrap();
        assert!(request.validate().is_ok());
        assert!(request.role_id.is_none());

        let request: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "username": "as",
            "full_name": "",
            "email": "not-an-email",
            "password": "short",
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("full_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_update_user_password_optional() {
        let request: UpdateUserRequest = serde_json::from_value(serde_json::json!({
            "email": "asha@example.com",
            "full_name": "Asha Menon",
        }))
        .unwrap();
        assert!(request.validate().is_ok());
        assert!(request.password.is_none());
    }
}
