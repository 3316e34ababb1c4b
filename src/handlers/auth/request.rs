//! Authentication request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::MAX_PASSWORD_LENGTH,
    error::{AppError, AppResult},
};

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = MAX_PASSWORD_LENGTH))]
    pub password: String,
}

/// Query of `GET /auth/permissions`
#[derive(Debug, Default, Deserialize)]
pub struct PermissionsQuery {
    /// Another user to inspect; requires `user_management.view`
    pub user_id: Option<String>,
}

impl PermissionsQuery {
    /// Parsed `user_id`; blank counts as absent
    pub fn user_id(&self) -> AppResult<Option<Uuid>> {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| {
                Uuid::parse_str(v)
                    .map_err(|_| AppError::InvalidInput("Invalid user_id".to_string()))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissions_query_user_id() {
        let query: PermissionsQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(matches!(query.user_id(), Ok(None)));

        let query = PermissionsQuery {
            user_id: Some("12345".to_string()),
        };
        assert!(matches!(query.user_id(), Err(AppError::InvalidInput(_))));
    }
}
