//! User handler implementations

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
    services::{PermissionService, UserService},
    state::AppState,
};

use super::{
    request::{CreateUserRequest, UpdateUserRequest},
    response::{UserResponse, UserRoleResponse},
};

/// List users ordered by email
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<UserResponse>>> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::VIEW).await?;

    let users = UserService::list_users(state.db()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a specific user by ID
pub async fn get_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::VIEW).await?;

    let user = UserService::get_user_by_id(state.db(), &id).await?;
    Ok(Json(user.into()))
}

/// Effective role of a user; users may always read their own
pub async fn get_user_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserRoleResponse>> {
    if id != auth_user.id {
        PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::VIEW)
            .await?;
    }

    let user = UserService::get_user_by_id(state.db(), &id).await?;
    Ok(Json(UserRoleResponse {
        user_id: user.id,
        role: user.role,
        role_id: user.role_id,
    }))
}

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::EDIT).await?;
    payload.validate()?;

    let user = UserService::create_user(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Update a user
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::EDIT).await?;
    payload.validate()?;

    let user = UserService::update_user(state.db(), &id, payload).await?;
    Ok(Json(user.into()))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::DELETE)
        .await?;

    UserService::delete_user(state.db(), &auth_user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
