//! Sales lead repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{NamedOption, SalesLead},
};

/// Repository for sales leads
pub struct SalesLeadRepository;

impl SalesLeadRepository {
    /// List sales leads ordered by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<SalesLead>> {
        let leads = sqlx::query_as::<_, SalesLead>(r#"SELECT * FROM sales_leads ORDER BY name ASC"#)
            .fetch_all(pool)
            .await?;

        Ok(leads)
    }

    /// Id/name pairs for pickers
    pub async fn options(pool: &PgPool) -> AppResult<Vec<NamedOption>> {
        let options = sqlx::query_as::<_, NamedOption>(
            r#"SELECT id, name FROM sales_leads ORDER BY name ASC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(options)
    }

    /// Find sales lead by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<SalesLead>> {
        let lead = sqlx::query_as::<_, SalesLead>(r#"SELECT * FROM sales_leads WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(lead)
    }

    /// Create a sales lead
    pub async fn create(pool: &PgPool, name: &str, email: &str, phone: &str) -> AppResult<SalesLead> {
        let lead = sqlx::query_as::<_, SalesLead>(
            r#"
            INSERT INTO sales_leads (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .fetch_one(pool)
        .await?;

        Ok(lead)
    }

    /// Update a sales lead
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: &str,
        email: &str,
        phone: &str,
    ) -> AppResult<Option<SalesLead>> {
        let lead = sqlx::query_as::<_, SalesLead>(
            r#"
            UPDATE sales_leads
            SET name = $2, email = $3, phone = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .fetch_optional(pool)
        .await?;

        Ok(lead)
    }

    /// Delete a sales lead
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM sales_leads WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
