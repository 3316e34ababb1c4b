//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User database model
///
/// `role` always holds the effective role: the name of the linked role row
/// when `role_id` is set, otherwise the legacy `users.role` column.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub role_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Username shown to clients, falling back to the email
    pub fn display_username(&self) -> String {
        if self.username.is_empty() {
            self.email.clone()
        } else {
            self.username.clone()
        }
    }

    /// Full name shown to clients, falling back to the email's local part
    pub fn display_full_name(&self) -> String {
        if self.full_name.is_empty() {
            self.email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string()
        } else {
            self.full_name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::roles;

    fn user(username: &str, full_name: &str, role: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            full_name: full_name.to_string(),
            email: "priya.shah@example.com".to_string(),
            password_hash: String::new(),
            role: role.to_string(),
            role_id: None,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn test_display_fallbacks() {
        let u = user("", "", roles::VIEWER);
        assert_eq!(u.display_username(), "priya.shah@example.com");
        assert_eq!(u.display_full_name(), "priya.shah");

        let u = user("pshah", "Priya Shah", roles::VIEWER);
        assert_eq!(u.display_username(), "pshah");
        assert_eq!(u.display_full_name(), "Priya Shah");
    }
}
