//! Database access
//!
//! Pool creation, embedded migrations and one repository per table group.

pub mod connection;
pub mod repositories;

use sqlx::PgPool;

pub use connection::{create_pool, table_exists};

/// Apply the embedded migrations in `migrations/`
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
