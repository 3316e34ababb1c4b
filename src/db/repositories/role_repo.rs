//! Role repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Role};

/// Repository for roles
pub struct RoleRepository;

impl RoleRepository {
    /// List roles ordered by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Role>> {
        let roles = sqlx::query_as::<_, Role>(r#"SELECT * FROM roles ORDER BY name ASC"#)
            .fetch_all(pool)
            .await?;

        Ok(roles)
    }

    /// Find role by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Role>> {
        let role = sqlx::query_as::<_, Role>(r#"SELECT * FROM roles WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(role)
    }

    /// Find role by name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> AppResult<Option<Role>> {
        let role = sqlx::query_as::<_, Role>(r#"SELECT * FROM roles WHERE name = $1"#)
            .bind(name)
            .fetch_optional(pool)
            .await?;

        Ok(role)
    }

    /// Whether a role other than `exclude_id` already has `name`
    pub async fn name_taken(pool: &PgPool, name: &str, exclude_id: Option<&Uuid>) -> AppResult<bool> {
        let taken: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (SELECT 1 FROM roles WHERE name = $1 AND ($2::uuid IS NULL OR id <> $2))"#,
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;

        Ok(taken)
    }

    /// Create a custom (non-system) role
    pub async fn create(pool: &PgPool, name: &str, description: Option<&str>) -> AppResult<Role> {
        let role = sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO roles (name, description, is_system)
            VALUES ($1, $2, FALSE)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(pool)
        .await?;

        Ok(role)
    }

    /// Update a role's name and description
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Option<Role>> {
        let role = sqlx::query_as::<_, Role>(
            r#"
            UPDATE roles
            SET name = COALESCE($2, name), description = COALESCE($3, description)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(pool)
        .await?;

        Ok(role)
    }

    /// Delete a role
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM roles WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
