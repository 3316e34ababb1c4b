//! Exchange rate handler implementations

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use crate::{
    constants::{actions, modules},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::ExchangeRate,
    services::{ExchangeRateService, PermissionService},
    state::AppState,
};

use super::request::CreateExchangeRateRequest;

/// Newest rate; the configured default is stored when none exists
pub async fn get_latest_rate(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ExchangeRate>> {
    PermissionService::require(&state, &auth_user, modules::SALES_UPLOAD, actions::VIEW).await?;

    let default_rate = state.config().reporting.default_exchange_rate;
    Ok(Json(
        ExchangeRateService::latest_or_seed(state.db(), default_rate).await?,
    ))
}

pub async fn create_rate(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateExchangeRateRequest>,
) -> AppResult<(StatusCode, Json<ExchangeRate>)> {
    PermissionService::require(&state, &auth_user, modules::SALES_UPLOAD, actions::EDIT).await?;
    payload.validate()?;

    let rate = ExchangeRateService::create_rate(state.db(), payload.rate, payload.date).await?;
    info!(rate = rate.rate, date = %rate.date, "Exchange rate recorded");

    Ok((StatusCode::CREATED, Json(rate)))
}
