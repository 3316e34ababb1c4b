//! Commission Desk - Application Entry Point

use std::{net::SocketAddr, time::Duration};

use redis::Client as RedisClient;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commission_desk::{
    config::CONFIG,
    constants::rate_limits,
    db::{self, repositories::PermissionRepository},
    services::UserService,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    if CONFIG.server.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Commission Desk server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Permission tables are re-created on demand, so startup continues without them
    match PermissionRepository::ensure_tables(&db_pool).await {
        Ok(true) => tracing::info!("Permission tables bootstrapped"),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "Could not verify permission tables"),
    }

    if let Some(admin) = UserService::bootstrap_admin(&db_pool, &CONFIG.bootstrap).await? {
        tracing::info!(email = %admin.email, "Created bootstrap admin");
    }

    // Redis is only consulted by the login rate limiter
    tracing::info!("Connecting to Redis...");
    let redis_client = RedisClient::open(CONFIG.redis.url.as_str())?;

    // Create application state
    let state = AppState::new(db_pool, redis_client, CONFIG.clone());
    let warmup = Duration::from_millis(rate_limits::REDIS_TIMEOUT_MS);
    match tokio::time::timeout(warmup, state.redis()).await {
        Ok(Ok(_)) => tracing::info!("Redis connection established"),
        Ok(Err(e)) => tracing::warn!(error = %e, "Redis unavailable, login rate limiting is skipped"),
        Err(_) => tracing::warn!("Redis connect timed out, login rate limiting is skipped"),
    }
    let app = commission_desk::app(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
