//! User repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Role, User},
};

/// Selects users with their effective role: the linked role's name, or the
/// legacy `users.role` column when no role row is linked.
const USER_SELECT: &str = r#"
    SELECT u.id, u.username, u.full_name, u.email, u.password_hash,
           COALESCE(r.name, u.role) AS role, u.role_id, u.created_at, u.last_login_at
    FROM users u
    LEFT JOIN roles r ON r.id = u.role_id
"#;

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        username: &str,
        full_name: &str,
        email: &str,
        password_hash: &str,
        role: &Role,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            WITH u AS (
                INSERT INTO users (username, full_name, email, password_hash, role, role_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
            )
            SELECT u.id, u.username, u.full_name, u.email, u.password_hash,
                   COALESCE(r.name, u.role) AS role, u.role_id, u.created_at, u.last_login_at
            FROM u
            LEFT JOIN roles r ON r.id = u.role_id
            "#,
        )
        .bind(username)
        .bind(full_name)
        .bind(email)
        .bind(password_hash)
        .bind(&role.name)
        .bind(role.id)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{USER_SELECT} WHERE u.id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{USER_SELECT} WHERE u.email = $1"))
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by username
    pub async fn find_by_username(pool: &PgPool, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{USER_SELECT} WHERE u.username = $1"))
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Whether another user already uses `email`
    pub async fn email_taken_by_other(
        pool: &PgPool,
        email: &str,
        exclude_id: &Uuid,
    ) -> AppResult<bool> {
        let taken: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (SELECT 1 FROM users WHERE email = $1 AND id <> $2)"#,
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;

        Ok(taken)
    }

    /// Whether another user already uses `username`
    pub async fn username_taken_by_other(
        pool: &PgPool,
        username: &str,
        exclude_id: &Uuid,
    ) -> AppResult<bool> {
        let taken: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (SELECT 1 FROM users WHERE username = $1 AND id <> $2)"#,
        )
        .bind(username)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;

        Ok(taken)
    }

    /// List all users ordered by email
    pub async fn list(pool: &PgPool) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!("{USER_SELECT} ORDER BY u.email ASC"))
            .fetch_all(pool)
            .await?;

        Ok(users)
    }

    /// Update user; `None` leaves a column unchanged
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        username: Option<&str>,
        full_name: Option<&str>,
        email: Option<&str>,
        role: Option<&Role>,
        password_hash: Option<&str>,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            WITH u AS (
                UPDATE users
                SET
                    username = COALESCE($2, username),
                    full_name = COALESCE($3, full_name),
                    email = COALESCE($4, email),
                    role = COALESCE($5, role),
                    role_id = COALESCE($6, role_id),
                    password_hash = COALESCE($7, password_hash)
                WHERE id = $1
                RETURNING *
            )
            SELECT u.id, u.username, u.full_name, u.email, u.password_hash,
                   COALESCE(r.name, u.role) AS role, u.role_id, u.created_at, u.last_login_at
            FROM u
            LEFT JOIN roles r ON r.id = u.role_id
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(full_name)
        .bind(email)
        .bind(role.map(|r| r.name.as_str()))
        .bind(role.map(|r| r.id))
        .bind(password_hash)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Delete user; sessions and permission grants cascade
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Update last login time
    pub async fn update_last_login(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"UPDATE users SET last_login_at = NOW() WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Count total users
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM users"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Count users linked to a role
    pub async fn count_with_role(pool: &PgPool, role_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM users WHERE role_id = $1"#)
            .bind(role_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
