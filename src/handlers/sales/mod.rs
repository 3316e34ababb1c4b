//! Sales record handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Sales routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_sales).post(handler::create_sale))
        .route(
            "/{id}",
            get(handler::get_sale)
                .put(handler::update_sale)
                .delete(handler::delete_sale),
        )
}
