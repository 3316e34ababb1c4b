//! Permission response DTOs

use serde::Serialize;

/// Result of a permission check
#[derive(Debug, Serialize)]
pub struct CheckPermissionResponse {
    pub has_permission: bool,
}

/// Result of a grant or revoke
#[derive(Debug, Serialize)]
pub struct PermissionChangeResponse {
    pub message: String,
}
