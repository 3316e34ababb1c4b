//! Sales lead handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{actions, modules},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::SalesLead,
    services::{PermissionService, SalesLeadService},
    state::AppState,
};

use super::request::SalesLeadRequest;

/// List sales_leads ordered by name
pub async fn list_sales_leads(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<SalesLead>>> {
    PermissionService::require(&state, &auth_user, modules::SALES_LEADS, actions::VIEW).await?;

    Ok(Json(SalesLeadService::list_sales_leads(state.db()).await?))
}

pub async fn get_sales_lead(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SalesLead>> {
    PermissionService::require(&state, &auth_user, modules::SALES_LEADS, actions::VIEW).await?;

    Ok(Json(SalesLeadService::get_sales_lead(state.db(), &id).await?))
}

pub async fn create_sales_lead(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SalesLeadRequest>,
) -> AppResult<(StatusCode, Json<SalesLead>)> {
    PermissionService::require(&state, &auth_user, modules::SALES_LEADS, actions::EDIT).await?;
    payload.validate()?;

    let created = SalesLeadService::create_sales_lead(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_sales_lead(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SalesLeadRequest>,
) -> AppResult<Json<SalesLead>> {
    PermissionService::require(&state, &auth_user, modules::SALES_LEADS, actions::EDIT).await?;
    payload.validate()?;

    Ok(Json(SalesLeadService::update_sales_lead(state.db(), &id, payload).await?))
}

pub async fn delete_sales_lead(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    PermissionService::require(&state, &auth_user, modules::SALES_LEADS, actions::DELETE).await?;

    SalesLeadService::delete_sales_lead(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
