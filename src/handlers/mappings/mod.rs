//! Client-product mapping handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Mapping routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_mappings).post(handler::create_mapping))
        .route(
            "/{id}",
            get(handler::get_mapping)
                .put(handler::update_mapping)
                .delete(handler::delete_mapping),
        )
}
