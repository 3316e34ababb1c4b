//! Login rate limiting
//!
//! Fixed-window counter per client IP kept in Redis. When Redis is
//! unreachable or slow, requests are let through.

use std::{net::SocketAddr, time::Duration};

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{constants::rate_limits, error::AppError, state::AppState};

/// Rate limit middleware for the login route
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let key = login_key(&ip);
    let budget = Duration::from_millis(rate_limits::REDIS_TIMEOUT_MS);
    match tokio::time::timeout(budget, hit(&state, &key)).await {
        Ok(Ok(count)) if count > rate_limits::AUTH_MAX_REQUESTS => {
            warn!(ip = %ip, count, "Login rate limit exceeded");
            return Err(AppError::TooManyRequests);
        }
        Ok(Ok(_)) => {}
        Ok(Err(e)) => warn!(error = %e, "Rate limiter unavailable, allowing request"),
        Err(_) => warn!(
            timeout_ms = rate_limits::REDIS_TIMEOUT_MS,
            "Rate limiter timed out, allowing request"
        ),
    }

    Ok(next.run(request).await)
}

fn login_key(ip: &str) -> String {
    format!("rate_limit:login:{}", ip)
}

/// Count a request in the current window
///
/// The expiry is set together with the key's creation in one transaction,
/// so a counter can never outlive its window.
async fn hit(state: &AppState, key: &str) -> redis::RedisResult<i64> {
    let mut conn = state.redis().await?;

    let (count,): (i64,) = redis::pipe()
        .atomic()
        .cmd("SET")
        .arg(key)
        .arg(0)
        .arg("EX")
        .arg(rate_limits::AUTH_WINDOW_SECS)
        .arg("NX")
        .ignore()
        .incr(key, 1)
        .query_async(&mut conn)
        .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_key_per_ip() {
        assert_eq!(login_key("203.0.113.7"), "rate_limit:login:203.0.113.7");
        assert_ne!(login_key("203.0.113.7"), login_key("203.0.113.8"));
    }
}
