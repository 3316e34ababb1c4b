//! Session repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Session, User},
};

/// Repository for login sessions
pub struct SessionRepository;

impl SessionRepository {
    /// Store a new session under the hash of its token
    pub async fn create(
        pool: &PgPool,
        token_hash: &str,
        user_id: &Uuid,
        expires_at: DateTime<Utc>,
    ) -> AppResult<Session> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (token_hash, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, expires_at, created_at
            "#,
        )
        .bind(token_hash)
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(pool)
        .await?;

        Ok(session)
    }

    /// The user owning an unexpired session
    pub async fn find_user_by_token_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.username, u.full_name, u.email, u.password_hash,
                   COALESCE(r.name, u.role) AS role, u.role_id, u.created_at, u.last_login_at
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            LEFT JOIN roles r ON r.id = u.role_id
            WHERE s.token_hash = $1 AND s.expires_at > NOW()
            "#,
        )
        .bind(token_hash)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Delete the session with this token hash
    pub async fn delete_by_token_hash(pool: &PgPool, token_hash: &str) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM sessions WHERE token_hash = $1"#)
            .bind(token_hash)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Delete a user's expired sessions
    pub async fn delete_expired_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<u64> {
        let result =
            sqlx::query(r#"DELETE FROM sessions WHERE user_id = $1 AND expires_at <= NOW()"#)
                .bind(user_id)
                .execute(pool)
                .await?;

        Ok(result.rows_affected())
    }
}
