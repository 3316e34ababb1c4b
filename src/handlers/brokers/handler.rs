//! Broker handler implementations

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
    models::Broker,
    services::{PermissionService, BrokerService},
    state::AppState,
};

use super::request::BrokerRequest;

/// List brokers ordered by name
pub async fn list_brokers(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<Broker>>> {
    PermissionService::require(&state, &auth_user, modules::BROKERS, actions::VIEW).await?;

    Ok(Json(BrokerService::list_brokers(state.db()).await?))
}

pub async fn get_broker(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Broker>> {
    PermissionService::require(&state, &auth_user, modules::BROKERS, actions::VIEW).await?;

    Ok(Json(BrokerService::get_broker(state.db(), &id).await?))
}

pub async fn create_broker(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<BrokerRequest>,
) -> AppResult<(StatusCode, Json<Broker>)> {
    PermissionService::require(&state, &auth_user, modules::BROKERS, actions::EDIT).await?;
    payload.validate()?;

    let created = BrokerService::create_broker(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_broker(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<BrokerRequest>,
) -> AppResult<Json<Broker>> {
    PermissionService::require(&state, &auth_user, modules::BROKERS, actions::EDIT).await?;
    payload.validate()?;

    Ok(Json(BrokerService::update_broker(state.db(), &id, payload).await?))
}

pub async fn delete_broker(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    PermissionService::require(&state, &auth_user, modules::BROKERS, actions::DELETE).await?;

    BrokerService::delete_broker(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
