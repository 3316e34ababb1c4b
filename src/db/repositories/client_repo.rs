//! Client repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Client, NamedOption},
};

/// Repository for clients
pub struct ClientRepository;

impl ClientRepository {
    /// List clients ordered by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(r#"SELECT * FROM clients ORDER BY name ASC"#)
            .fetch_all(pool)
            .await?;

        Ok(clients)
    }

    /// Id/name pairs for pickers
    pub async fn options(pool: &PgPool) -> AppResult<Vec<NamedOption>> {
        let options =
            sqlx::query_as::<_, NamedOption>(r#"SELECT id, name FROM clients ORDER BY name ASC"#)
                .fetch_all(pool)
                .await?;

        Ok(options)
    }

    /// Find client by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(r#"SELECT * FROM clients WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(client)
    }

    /// Create a client
    pub async fn create(
        pool: &PgPool,
        name: &str,
        industry: &str,
        region: &str,
    ) -> AppResult<Client> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, industry, region)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(industry)
        .bind(region)
        .fetch_one(pool)
        .await?;

        Ok(client)
    }

    /// Update a client
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: &str,
        industry: &str,
        region: &str,
    ) -> AppResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = $2, industry = $3, region = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(industry)
        .bind(region)
        .fetch_optional(pool)
        .await?;

        Ok(client)
    }

    /// Delete a client
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM clients WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
