//! User response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::User;

/// User as listed in user management
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub role_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.display_username(),
            full_name: user.display_full_name(),
            id: user.id,
            email: user.email,
            role: user.role,
            role_id: user.role_id,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Effective role of a user
#[derive(Debug, Serialize)]
pub struct UserRoleResponse {
    pub user_id: Uuid,
    pub role: String,
    pub role_id: Option<Uuid>,
}
