//! Client handler implementations

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
    models::Client,
    services::{PermissionService, ClientService},
    state::AppState,
};

use super::request::ClientRequest;

/// List clients ordered by name
pub async fn list_clients(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<Client>>> {
    PermissionService::require(&state, &auth_user, modules::CLIENTS, actions::VIEW).await?;

    Ok(Json(ClientService::list_clients(state.db()).await?))
}

pub async fn get_client(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Client>> {
    PermissionService::require(&state, &auth_user, modules::CLIENTS, actions::VIEW).await?;

    Ok(Json(ClientService::get_client(state.db(), &id).await?))
}

pub async fn create_client(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<ClientRequest>,
) -> AppResult<(StatusCode, Json<Client>)> {
    PermissionService::require(&state, &auth_user, modules::CLIENTS, actions::EDIT).await?;
    payload.validate()?;

    let created = ClientService::create_client(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_client(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ClientRequest>,
) -> AppResult<Json<Client>> {
    PermissionService::require(&state, &auth_user, modules::CLIENTS, actions::EDIT).await?;
    payload.validate()?;

    Ok(Json(ClientService::update_client(state.db(), &id, payload).await?))
}

pub async fn delete_client(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    PermissionService::require(&state, &auth_user, modules::CLIENTS, actions::DELETE).await?;

    ClientService::delete_client(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
