//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::debug;

use crate::{
    config::SessionConfig,
    constants::SESSION_TOKEN_LENGTH,
    db::repositories::{SessionRepository, UserRepository},
    error::{AppError, AppResult},
    models::User,
    utils::{generate_secure_token, hash_string},
};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Login with email and password.
    ///
    /// Returns the user and the raw session token; only its hash is stored.
    pub async fn login(
        pool: &PgPool,
        session: &SessionConfig,
        email: &str,
        password: &str,
    ) -> AppResult<(User, String)> {
        // Unknown email and wrong password are indistinguishable to the caller
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            debug!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let purged = SessionRepository::delete_expired_for_user(pool, &user.id).await?;
        if purged > 0 {
            debug!(user_id = %user.id, purged, "Purged expired sessions");
        }

        let token = generate_secure_token(SESSION_TOKEN_LENGTH);
        let expires_at = Utc::now() + Duration::hours(session.ttl_hours);
        let created =
            SessionRepository::create(pool, &hash_string(&token), &user.id, expires_at).await?;
        debug!(user_id = %user.id, session_id = %created.id, expires_at = %created.expires_at, "Session created");

        UserRepository::update_last_login(pool, &user.id).await?;

        Ok((user, token))
    }

    /// Delete the session behind `token`, if any
    pub async fn logout(pool: &PgPool, token: Option<&str>) -> AppResult<()> {
        if let Some(token) = token {
            SessionRepository::delete_by_token_hash(pool, &hash_string(token)).await?;
        }

        Ok(())
    }

    /// Resolve a session token to its user
    pub async fn user_for_token(pool: &PgPool, token: &str) -> AppResult<User> {
        SessionRepository::find_user_by_token_hash(pool, &hash_string(token))
            .await?
            .ok_or(AppError::InvalidSession)
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_round_trip() {
        let hash = AuthService::hash_password("correct horse battery").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(AuthService::verify_password("correct horse battery", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(AuthService::verify_password("anything", "not-a-hash").is_err());
    }
}
