//! Broker repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Broker, NamedOption},
};

/// Repository for brokers
pub struct BrokerRepository;

impl BrokerRepository {
    /// List brokers ordered by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Broker>> {
        let brokers = sqlx::query_as::<_, Broker>(r#"SELECT * FROM brokers ORDER BY name ASC"#)
            .fetch_all(pool)
            .await?;

        Ok(brokers)
    }

    /// Id/name pairs for pickers
    pub async fn options(pool: &PgPool) -> AppResult<Vec<NamedOption>> {
        let options =
            sqlx::query_as::<_, NamedOption>(r#"SELECT id, name FROM brokers ORDER BY name ASC"#)
                .fetch_all(pool)
                .await?;

        Ok(options)
    }

    /// Find broker by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Broker>> {
        let broker = sqlx::query_as::<_, Broker>(r#"SELECT * FROM brokers WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(broker)
    }

    /// Create a broker
    pub async fn create(
        pool: &PgPool,
        name: &str,
        contact_email: &str,
        partner_type: &str,
    ) -> AppResult<Broker> {
        let broker = sqlx::query_as::<_, Broker>(
            r#"
            INSERT INTO brokers (name, contact_email, partner_type)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(contact_email)
        .bind(partner_type)
        .fetch_one(pool)
        .await?;

        Ok(broker)
    }

    /// Update a broker
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: &str,
        contact_email: &str,
        partner_type: &str,
    ) -> AppResult<Option<Broker>> {
        let broker = sqlx::query_as::<_, Broker>(
            r#"
            UPDATE brokers
            SET name = $2, contact_email = $3, partner_type = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(contact_email)
        .bind(partner_type)
        .fetch_optional(pool)
        .await?;

        Ok(broker)
    }

    /// Delete a broker
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM brokers WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
