//! Authentication handler implementations

use axum::{
    extract::{Query, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::IntoResponse,
    Json,
};
use tracing::info;
use validator::Validate;

use crate::{
    constants::{actions, modules, SESSION_COOKIE_NAME},
    error::AppResult,
    middleware::auth::{session_token, AuthenticatedUser},
    models::GrantedPermission,
    services::{AuthService, PermissionService},
    state::AppState,
};

use super::{
    request::{LoginRequest, PermissionsQuery},
    response::{CurrentUserResponse, LoginResponse, LogoutResponse},
};

/// Login with email and password; sets the session cookie
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let session = &state.config().session;
    let (user, token) =
        AuthService::login(state.db(), session, &payload.email, &payload.password).await?;

    info!(user_id = %user.id, role = %user.role, "User logged in");

    let cookie = session_cookie(&token, session.ttl_seconds(), session.secure_cookie);
    let response = LoginResponse {
        message: "Login successful".to_string(),
        user: user.into(),
    };

    Ok(([(SET_COOKIE, cookie)], Json(response)))
}

/// Logout; drops the presented session and clears the cookie
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let token = session_token(&headers);
    AuthService::logout(state.db(), token.as_deref()).await?;

    let cookie = clear_session_cookie(state.config().session.secure_cookie);
    Ok((
        [(SET_COOKIE, cookie)],
        Json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// Get current authenticated user
pub async fn get_current_user(auth_user: AuthenticatedUser) -> Json<CurrentUserResponse> {
    Json(auth_user.into())
}

/// Granted module/action pairs of the current user, or of `user_id`
pub async fn get_permissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<PermissionsQuery>,
) -> AppResult<Json<Vec<GrantedPermission>>> {
    let target = match query.user_id()? {
        Some(id) if id != auth_user.id => {
            PermissionService::require(&state, &auth_user, modules::USER_MANAGEMENT, actions::VIEW)
                .await?;
            id
        }
        _ => auth_user.id,
    };

    Ok(Json(PermissionService::granted(state.db(), target).await))
}

/// `Set-Cookie` value carrying a new session token
fn session_cookie(token: &str, max_age: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; Path=/; Max-Age={}; SameSite=Lax",
        SESSION_COOKIE_NAME, token, max_age
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value expiring the session cookie
fn clear_session_cookie(secure: bool) -> String {
    session_cookie("", 0, secure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc", 86_400, false);
        assert_eq!(
            cookie,
            "session_token=abc; HttpOnly; Path=/; Max-Age=86400; SameSite=Lax"
        );

        let cookie = session_cookie("abc", 3600, true);
        assert!(cookie.ends_with("; Secure"));
    }

    #[test]
    fn test_clear_session_cookie() {
        let cookie = clear_session_cookie(false);
        assert!(cookie.starts_with("session_token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
