//! User management service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    config::BootstrapConfig,
    constants::roles,
    db::repositories::{RoleRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::users::request::{CreateUserRequest, UpdateUserRequest},
    models::{Role, User},
    services::{AuthService, RoleService},
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// List users ordered by email
    pub async fn list_users(pool: &PgPool) -> AppResult<Vec<User>> {
        UserRepository::list(pool).await
    }

    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Create a user; the role defaults to viewer
    pub async fn create_user(pool: &PgPool, payload: CreateUserRequest) -> AppResult<User> {
        if UserRepository::find_by_email(pool, &payload.email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already exists".to_string()));
        }
        if UserRepository::find_by_username(pool, &payload.username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists("Username already exists".to_string()));
        }

        let role = match RoleService::resolve(pool, payload.role_id, payload.role.as_deref()).await? {
            Some(role) => role,
            None => Self::default_role(pool).await?,
        };

        let password_hash = AuthService::hash_password(&payload.password)?;

        let user = UserRepository::create(
            pool,
            &payload.username,
            &payload.full_name,
            &payload.email,
            &password_hash,
            &role,
        )
        .await?;

        info!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }

    /// Update a user; a new password is optional
    pub async fn update_user(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateUserRequest,
    ) -> AppResult<User> {
        Self::get_user_by_id(pool, id).await?;

        if UserRepository::email_taken_by_other(pool, &payload.email, id).await? {
            return Err(AppError::AlreadyExists("Email already exists".to_string()));
        }
        if let Some(username) = payload.username.as_deref() {
            if UserRepository::username_taken_by_other(pool, username, id).await? {
                return Err(AppError::AlreadyExists("Username already exists".to_string()));
            }
        }

        let role = RoleService::resolve(pool, payload.role_id, payload.role.as_deref()).await?;

        let password_hash = match payload.password.as_deref().filter(|p| !p.is_empty()) {
            Some(password) => Some(AuthService::hash_password(password)?),
            None => None,
        };

        UserRepository::update(
            pool,
            id,
            payload.username.as_deref(),
            Some(&payload.full_name),
            Some(&payload.email),
            role.as_ref(),
            password_hash.as_deref(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Delete a user; users cannot delete themselves
    pub async fn delete_user(pool: &PgPool, requester_id: &Uuid, id: &Uuid) -> AppResult<()> {
        if requester_id == id {
            return Err(AppError::InvalidInput(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !UserRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        info!(user_id = %id, deleted_by = %requester_id, "User deleted");
        Ok(())
    }

    /// Create the configured admin account when no users exist yet
    pub async fn bootstrap_admin(pool: &PgPool, config: &BootstrapConfig) -> AppResult<Option<User>> {
        let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
            return Ok(None);
        };

        if UserRepository::count(pool).await? > 0 {
            return Ok(None);
        }

        let role = RoleRepository::find_by_name(pool, roles::ADMIN)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("admin role is missing")))?;

        let username = email.split('@').next().unwrap_or(email.as_str());
        let password_hash = AuthService::hash_password(password)?;
        let user =
            UserRepository::create(pool, username, "Administrator", email, &password_hash, &role)
                .await?;

        info!(user_id = %user.id, email = %user.email, "Bootstrap admin account created");
        Ok(Some(user))
    }

    async fn default_role(pool: &PgPool) -> AppResult<Role> {
        RoleRepository::find_by_name(pool, roles::VIEWER)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("viewer role is missing")))
    }
}
