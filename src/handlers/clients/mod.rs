//! Client handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Client routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_clients).post(handler::create_client))
        .route(
            "/{id}",
            get(handler::get_client)
                .put(handler::update_client)
                .delete(handler::delete_client),
        )
}
