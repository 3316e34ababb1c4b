//! Session authentication middleware
//!
//! The session token is read from the `session_token` cookie, or from an
//! `Authorization: Bearer` header for non-browser clients.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
        HeaderMap,
    },
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{
    constants::SESSION_COOKIE_NAME,
    error::AppError,
    models::User,
    services::AuthService,
    state::AppState,
};

/// User resolved from a valid session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub role: String,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            username: user.display_username(),
            full_name: user.display_full_name(),
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Session token from the cookie, falling back to a bearer header
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookies| cookie_value(cookies, SESSION_COOKIE_NAME))
        .or_else(|| {
            headers
                .get(AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Bearer "))
                .map(str::trim)
                .filter(|t| !t.is_empty())
        })
        .map(str::to_string)
}

/// Value of cookie `name` in a `Cookie` header
fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then_some(value)
    })
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(token) = session_token(request.headers()) else {
        debug!(path = %path, "Auth failed: no session token");
        return Err(AppError::Unauthorized);
    };

    let user = AuthService::user_for_token(state.db(), &token)
        .await
        .inspect_err(|e| debug!(path = %path, error = %e, "Auth failed: session lookup"))?;

    debug!(path = %path, user_id = %user.id, role = %user.role, "User authenticated");

    request
        .extensions_mut()
        .insert(AuthenticatedUser::from(user));
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_cookie_value() {
        let header = "theme=dark; session_token=abc123; lang=en";
        assert_eq!(cookie_value(header, "session_token"), Some("abc123"));
        assert_eq!(cookie_value(header, "lang"), Some("en"));
        assert_eq!(cookie_value(header, "missing"), None);
        assert_eq!(cookie_value("session_token=", "session_token"), None);
        assert_eq!(cookie_value("xsession_token=1", "session_token"), None);
    }

    #[test]
    fn test_session_token_prefers_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("session_token=from-cookie"));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));

        assert_eq!(session_token(&headers).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn test_session_token_from_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
        assert_eq!(session_token(&headers).as_deref(), Some("tok"));

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert_eq!(session_token(&headers), None);

        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_from_user_applies_display_fallbacks() {
        let user = User {
            id: Uuid::new_v4(),
            username: String::new(),
            full_name: String::new(),
            email: "ravi.k@example.com".to_string(),
            password_hash: String::new(),
            role: "viewer".to_string(),
            role_id: None,
            created_at: chrono::Utc::now(),
            last_login_at: None,
        };

        let auth = AuthenticatedUser::from(user);
        assert_eq!(auth.username, "ravi.k@example.com");
        assert_eq!(auth.full_name, "ravi.k");
    }
}
