//! Exchange rate handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Exchange rate routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_rate))
        .route("/latest", get(handler::get_latest_rate))
}
