//! Permission handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Permission routes; per-user grants live under `/users`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/modules", get(handler::list_modules))
        .route("/check", get(handler::check_permission))
        .route("/users", get(handler::list_users_with_permissions))
        .route("/bootstrap", post(handler::bootstrap_permissions))
}
