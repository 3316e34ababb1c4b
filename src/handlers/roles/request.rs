//! Role request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create role request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoleRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// Update role request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}
