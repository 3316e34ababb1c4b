//! Sales record handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{actions, modules},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::{SalesRecord, SalesRecordDetail},
    services::{PermissionService, SalesService},
    state::AppState,
};

use super::request::SalesRequest;

/// List sales, newest first
pub async fn list_sales(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<SalesRecordDetail>>> {
    PermissionService::require(&state, &auth_user, modules::SALES_UPLOAD, actions::VIEW).await?;

    Ok(Json(SalesService::list_sales(state.db()).await?))
}

pub async fn get_sale(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SalesRecord>> {
    PermissionService::require(&state, &auth_user, modules::SALES_UPLOAD, actions::VIEW).await?;

    Ok(Json(SalesService::get_sale(state.db(), &id).await?))
}

/// Record a sale; dependent amounts are derived
pub async fn create_sale(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SalesRequest>,
) -> AppResult<(StatusCode, Json<SalesRecord>)> {
    PermissionService::require(&state, &auth_user, modules::SALES_UPLOAD, actions::EDIT).await?;
    payload.validate()?;

    let default_rate = state.config().reporting.default_exchange_rate;
    let sale = SalesService::create_sale(state.db(), default_rate, payload).await?;

    info!(sale_id = %sale.id, user_id = %auth_user.id, gwp_inr = sale.gwp_inr, "Sale recorded");
    Ok((StatusCode::CREATED, Json(sale)))
}

pub async fn update_sale(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SalesRequest>,
) -> AppResult<Json<SalesRecord>> {
    PermissionService::require(&state, &auth_user, modules::SALES_UPLOAD, actions::EDIT).await?;
    payload.validate()?;

    let default_rate = state.config().reporting.default_exchange_rate;
    Ok(Json(
        SalesService::update_sale(state.db(), default_rate, &id, payload).await?,
    ))
}

pub async fn delete_sale(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    PermissionService::require(&state, &auth_user, modules::SALES_UPLOAD, actions::DELETE).await?;

    SalesService::delete_sale(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
