//! Permission handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::{actions, modules},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{BootstrapCounts, Module, UserPermission},
    services::{permission_service::UserWithPermissions, PermissionService},
    state::AppState,
};

use super::{
    request::CheckPermissionQuery,
    response::{CheckPermissionResponse, PermissionChangeResponse},
};

/// Modules ordered by name
pub async fn list_modules(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<Module>>> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::VIEW).await?;

    Ok(Json(PermissionService::list_modules(state.db()).await?))
}

/// Check one module/action pair for a user
pub async fn check_permission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<CheckPermissionQuery>,
) -> AppResult<Json<CheckPermissionResponse>> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::VIEW).await?;

    let user_id = query.user_id()?;
    let (Some(user_id), Some(module)) = (user_id, query.module.filter(|m| !m.is_empty())) else {
        return Err(AppError::InvalidInput(
            "user_id and module are required".to_string(),
        ));
    };
    let action = query.permission.unwrap_or_else(|| actions::VIEW.to_string());

    let has_permission = PermissionService::check(state.db(), user_id, &module, &action).await;
    Ok(Json(CheckPermissionResponse { has_permission }))
}

/// Every user with their stored grants
pub async fn list_users_with_permissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<UserWithPermissions>>> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::VIEW).await?;

    Ok(Json(
        PermissionService::list_users_with_permissions(state.db()).await?,
    ))
}

/// Every permission with a `granted` flag for one user
pub async fn list_user_permissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<UserPermission>>> {
    if id != auth_user.id {
        PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::VIEW)
            .await?;
    }

    Ok(Json(PermissionService::for_user(state.db(), &id).await?))
}

/// Grant a permission to a user
pub async fn grant_permission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((id, permission_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<PermissionChangeResponse>> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::EDIT).await?;

    PermissionService::grant(state.db(), &id, &permission_id, &auth_user.id).await?;
    info!(user_id = %id, permission_id = %permission_id, granted_by = %auth_user.id, "Permission granted");

    Ok(Json(PermissionChangeResponse {
        message: "Permission granted".to_string(),
    }))
}

/// Revoke a permission from a user
pub async fn revoke_permission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((id, permission_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<PermissionChangeResponse>> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::DELETE)
        .await?;

    PermissionService::revoke(state.db(), &id, &permission_id).await?;
    info!(user_id = %id, permission_id = %permission_id, revoked_by = %auth_user.id, "Permission revoked");

    Ok(Json(PermissionChangeResponse {
        message: "Permission revoked".to_string(),
    }))
}

/// Create and seed the permission tables
pub async fn bootstrap_permissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<BootstrapCounts>> {
    PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::EDIT).await?;

    let counts = PermissionService::bootstrap(state.db()).await?;
    info!(
        modules = counts.modules,
        permissions = counts.permissions,
        user_permissions = counts.user_permissions,
        "Permission tables bootstrapped"
    );
    Ok(Json(counts))
}
