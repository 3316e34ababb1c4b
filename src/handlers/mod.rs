//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.
//! Everything except health, login and logout requires a session; module
//! permissions are checked inside the handlers.

pub mod auth;
pub mod brokers;
pub mod clients;
pub mod exchange_rates;
pub mod health;
pub mod mappings;
pub mod permissions;
pub mod products;
pub mod reports;
pub mod roles;
pub mod sales;
pub mod sales_leads;
pub mod users;

use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/users", users::routes())
        .nest("/roles", roles::routes())
        .nest("/permissions", permissions::routes())
        .nest("/clients", clients::routes())
        .nest("/products", products::routes())
        .nest("/brokers", brokers::routes())
        .nest("/sales-leads", sales_leads::routes())
        .nest("/mappings", mappings::routes())
        .nest("/sales", sales::routes())
        .nest("/exchange-rates", exchange_rates::routes())
        .nest("/reports", reports::routes())
        .route("/dashboard", get(reports::dashboard))
        .route("/options", get(mappings::get_options))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes(state))
        .merge(protected)
}
