//! Role handler implementations

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
    models::Role,
    services::{PermissionService, RoleService},
    state::AppState,
};

use super::request::{CreateRoleRequest, UpdateRoleRequest};

pub async fn list_roles(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<Role>>> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::VIEW).await?;

    Ok(Json(RoleService::list_roles(state.db()).await?))
}

pub async fn get_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Role>> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::VIEW).await?;

    Ok(Json(RoleService::get_role(state.db(), &id).await?))
}

pub async fn create_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateRoleRequest>,
) -> AppResult<(StatusCode, Json<Role>)> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::EDIT).await?;
    payload.validate()?;

    let role = RoleService::create_role(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

pub async fn update_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRoleRequest>,
) -> AppResult<Json<Role>> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::EDIT).await?;
    payload.validate()?;

    Ok(Json(RoleService::update_role(state.db(), &id, payload).await?))
}

pub async fn delete_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::DELETE)
        .await?;

    RoleService::delete_role(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
