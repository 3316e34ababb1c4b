//! Request logging middleware

use std::{net::SocketAddr, time::Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// Log one line per request with its status and latency
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_default();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    match outcome(status) {
        Some(outcome) => warn!(
            method = %method,
            path = %path,
            client_ip = %client_ip,
            status = status.as_u16(),
            duration_ms,
            "Request completed with {}",
            outcome
        ),
        None => info!(
            method = %method,
            path = %path,
            client_ip = %client_ip,
            status = status.as_u16(),
            duration_ms,
            "Request completed"
        ),
    }

    response
}

/// Error class worth a warning; 401, 403 and 404 are routine
fn outcome(status: StatusCode) -> Option<&'static str> {
    if status.is_server_error() {
        Some("server error")
    } else if status.is_client_error()
        && !matches!(
            status,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
        )
    {
        Some("client error")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome() {
        assert_eq!(outcome(StatusCode::OK), None);
        assert_eq!(outcome(StatusCode::NOT_FOUND), None);
        assert_eq!(outcome(StatusCode::UNAUTHORIZED), None);
        assert_eq!(outcome(StatusCode::BAD_REQUEST), Some("client error"));
        assert_eq!(outcome(StatusCode::TOO_MANY_REQUESTS), Some("client error"));
        assert_eq!(outcome(StatusCode::BAD_GATEWAY), Some("server error"));
    }
}
