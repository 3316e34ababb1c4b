//! Role management handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Role routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_roles).post(handler::create_role))
        .route(
            "/{id}",
            get(handler::get_role)
                .put(handler::update_role)
                .delete(handler::delete_role),
        )
}
