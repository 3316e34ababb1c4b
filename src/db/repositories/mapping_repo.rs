//! Client-product mapping repository

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ClientProductMap, ClientProductMapDetail},
};

/// Repository for client-product mappings
pub struct MappingRepository;

impl MappingRepository {
    /// List mappings with display names, ordered by client name
    pub async fn list_detailed(pool: &PgPool) -> AppResult<Vec<ClientProductMapDetail>> {
        let mappings = sqlx::query_as::<_, ClientProductMapDetail>(
            r#"
            SELECT m.id, m.client_id, m.product_id, m.broker_id, m.sales_lead_id,
                   m.channel_type, m.start_date,
                   c.name AS client_name, p.name AS product_name,
                   b.name AS broker_name, sl.name AS sales_lead_name
            FROM client_product_map m
            JOIN clients c ON c.id = m.client_id
            JOIN products p ON p.id = m.product_id
            JOIN brokers b ON b.id = m.broker_id
            JOIN sales_leads sl ON sl.id = m.sales_lead_id
            ORDER BY c.name ASC, p.name ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(mappings)
    }

    /// Find mapping by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<ClientProductMap>> {
        let mapping = sqlx::query_as::<_, ClientProductMap>(
            r#"SELECT * FROM client_product_map WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(mapping)
    }

    /// Create a mapping
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        client_id: &Uuid,
        product_id: &Uuid,
        broker_id: &Uuid,
        sales_lead_id: &Uuid,
        channel_type: &str,
        start_date: NaiveDate,
    ) -> AppResult<ClientProductMap> {
        let mapping = sqlx::query_as::<_, ClientProductMap>(
            r#"
            INSERT INTO client_product_map
                (client_id, product_id, broker_id, sales_lead_id, channel_type, start_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(client_id)
        .bind(product_id)
        .bind(broker_id)
        .bind(sales_lead_id)
        .bind(channel_type)
        .bind(start_date)
        .fetch_one(pool)
        .await?;

        Ok(mapping)
    }

    /// Update a mapping
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        client_id: &Uuid,
        product_id: &Uuid,
        broker_id: &Uuid,
        sales_lead_id: &Uuid,
        channel_type: &str,
        start_date: NaiveDate,
    ) -> AppResult<Option<ClientProductMap>> {
        let mapping = sqlx::query_as::<_, ClientProductMap>(
            r#"
            UPDATE client_product_map
            SET client_id = $2, product_id = $3, broker_id = $4, sales_lead_id = $5,
                channel_type = $6, start_date = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(client_id)
        .bind(product_id)
        .bind(broker_id)
        .bind(sales_lead_id)
        .bind(channel_type)
        .bind(start_date)
        .fetch_optional(pool)
        .await?;

        Ok(mapping)
    }

    /// Delete a mapping
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM client_product_map WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
