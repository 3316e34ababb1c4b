//! Authentication response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::{middleware::auth::AuthenticatedUser, models::User};

/// Current user as exposed to clients
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

impl From<AuthenticatedUser> for CurrentUserResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            email: user.email,
            role: user.role,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        AuthenticatedUser::from(user).into()
    }
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: CurrentUserResponse,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}
