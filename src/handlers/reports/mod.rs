//! Reporting handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Report routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handler::dashboard))
        .route("/trends", get(handler::trends))
        .route("/commission", get(handler::commission))
        .route("/commission/csv", get(handler::commission_csv))
}
