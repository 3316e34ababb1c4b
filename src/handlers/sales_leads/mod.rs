//! Sales lead handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Sales lead routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_sales_leads).post(handler::create_sales_lead))
        .route(
            "/{id}",
            get(handler::get_sales_lead)
                .put(handler::update_sales_lead)
                .delete(handler::delete_sales_lead),
        )
}
