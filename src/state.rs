//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use redis::{aio::ConnectionManager, Client as RedisClient, RedisResult};
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: PgPool,

    /// Redis client the connection manager is built from
    pub redis_client: RedisClient,

    /// Redis connection manager, established on first use and then shared
    pub redis: OnceCell<ConnectionManager>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, redis_client: RedisClient, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                redis_client,
                redis: OnceCell::new(),
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get the shared Redis connection; a failed connect is retried on the next call
    pub async fn redis(&self) -> RedisResult<ConnectionManager> {
        let manager = self
            .inner
            .redis
            .get_or_try_init(|| ConnectionManager::new(self.inner.redis_client.clone()))
            .await?;
        Ok(manager.clone())
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
