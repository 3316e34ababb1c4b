//! Role management service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    db::repositories::{RoleRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::roles::request::{CreateRoleRequest, UpdateRoleRequest},
    models::Role,
    utils::validate_role_name,
};

/// Role service for business logic
pub struct RoleService;

impl RoleService {
    /// List roles ordered by name
    pub async fn list_roles(pool: &PgPool) -> AppResult<Vec<Role>> {
        RoleRepository::list(pool).await
    }

    /// Get role by ID
    pub async fn get_role(pool: &PgPool, id: &Uuid) -> AppResult<Role> {
        RoleRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Role not found".to_string()))
    }

    /// Create a custom role
    pub async fn create_role(pool: &PgPool, payload: CreateRoleRequest) -> AppResult<Role> {
        let name = payload.name.trim();
        validate_role_name(name).map_err(|e| AppError::Validation(e.to_string()))?;

        if RoleRepository::name_taken(pool, name, None).await? {
            return Err(AppError::AlreadyExists("Role name already exists".to_string()));
        }

        let role = RoleRepository::create(pool, name, payload.description.as_deref()).await?;
        info!(role_id = %role.id, name = %role.name, "Role created");
        Ok(role)
    }

    /// Update a custom role; system roles are read-only
    pub async fn update_role(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateRoleRequest,
    ) -> AppResult<Role> {
        let role = Self::get_role(pool, id).await?;
        if role.is_system {
            return Err(AppError::Forbidden("System roles cannot be modified".to_string()));
        }

        let name = payload.name.as_deref().map(str::trim);
        if let Some(name) = name {
            validate_role_name(name).map_err(|e| AppError::Validation(e.to_string()))?;
            if RoleRepository::name_taken(pool, name, Some(id)).await? {
                return Err(AppError::AlreadyExists("Role name already exists".to_string()));
            }
        }

        RoleRepository::update(pool, id, name, payload.description.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound("Role not found".to_string()))
    }

    /// Delete a custom role that no user holds
    pub async fn delete_role(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        let role = Self::get_role(pool, id).await?;
        if role.is_system {
            return Err(AppError::Forbidden("System roles cannot be deleted".to_string()));
        }

        let holders = UserRepository::count_with_role(pool, id).await?;
        if holders > 0 {
            return Err(AppError::Conflict(format!(
                "Role is assigned to {} user(s)",
                holders
            )));
        }

        RoleRepository::delete(pool, id).await?;
        info!(role_id = %id, name = %role.name, "Role deleted");
        Ok(())
    }

    /// Resolve a role given by id or by name; neither given yields `None`
    pub async fn resolve(
        pool: &PgPool,
        role_id: Option<Uuid>,
        role: Option<&str>,
    ) -> AppResult<Option<Role>> {
        let found = match (role_id, role.filter(|r| !r.is_empty())) {
            (Some(id), _) => RoleRepository::find_by_id(pool, &id).await?,
            (None, Some(name)) => RoleRepository::find_by_name(pool, name).await?,
            (None, None) => return Ok(None),
        };

        found
            .map(Some)
            .ok_or_else(|| AppError::Validation("Invalid role".to_string()))
    }
}
