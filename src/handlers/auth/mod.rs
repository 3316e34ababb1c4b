//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::{
    middleware::{auth_middleware, rate_limit_middleware},
    state::AppState,
};

/// Authentication routes; login and logout work without a session
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route(
            "/login",
            post(handler::login).layer(from_fn_with_state(state.clone(), rate_limit_middleware)),
        )
        .route("/logout", post(handler::logout));

    let protected = Router::new()
        .route("/me", get(handler::get_current_user))
        .route("/permissions", get(handler::get_permissions))
        .route_layer(from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
