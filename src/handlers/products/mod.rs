//! Product handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Product routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_products).post(handler::create_product))
        .route(
            "/{id}",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
}
