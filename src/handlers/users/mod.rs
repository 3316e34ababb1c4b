//! User management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, put},
    Router,
};

use crate::state::AppState;

use super::permissions;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_users).post(handler::create_user))
        .route(
            "/{id}",
            get(handler::get_user)
                .put(handler::update_user)
                .delete(handler::delete_user),
        )
        .route("/{id}/role", get(handler::get_user_role))
        // Per-user permission grants
        .route("/{id}/permissions", get(permissions::list_user_permissions))
        .route(
            "/{id}/permissions/{permission_id}",
            put(permissions::grant_permission).delete(permissions::revoke_permission),
        )
}
