//! Broker handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Broker routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_brokers).post(handler::create_broker))
        .route(
            "/{id}",
            get(handler::get_broker)
                .put(handler::update_broker)
                .delete(handler::delete_broker),
        )
}
