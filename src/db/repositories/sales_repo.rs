//! Sales data repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{SalesFigures, SalesRecord, SalesRecordDetail},
};

/// Repository for sales transactions
pub struct SalesRepository;

impl SalesRepository {
    /// List sales with client, product and broker names, newest first
    pub async fn list_detailed(pool: &PgPool) -> AppResult<Vec<SalesRecordDetail>> {
        let records = sqlx::query_as::<_, SalesRecordDetail>(
            r#"
            SELECT s.*, c.name AS client_name, p.name AS product_name, b.name AS broker_name
            FROM sales_data s
            JOIN clients c ON c.id = s.client_id
            JOIN products p ON p.id = s.product_id
            JOIN brokers b ON b.id = s.broker_id
            ORDER BY s.sale_date DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find a sale by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<SalesRecord>> {
        let record = sqlx::query_as::<_, SalesRecord>(r#"SELECT * FROM sales_data WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// Insert a sale
    pub async fn create(pool: &PgPool, figures: &SalesFigures) -> AppResult<SalesRecord> {
        let record = sqlx::query_as::<_, SalesRecord>(
            r#"
            INSERT INTO sales_data (
                client_id, product_id, broker_id, channel_type,
                nbp_inr, gwp_inr, nbp_usd, gwp_usd,
                broker_commission_pct, broker_commission_inr,
                cdp_fee_pct, cdp_fee_inr, sale_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(figures.client_id)
        .bind(figures.product_id)
        .bind(figures.broker_id)
        .bind(&figures.channel_type)
        .bind(figures.nbp_inr)
        .bind(figures.gwp_inr)
        .bind(figures.nbp_usd)
        .bind(figures.gwp_usd)
        .bind(figures.broker_commission_pct)
        .bind(figures.broker_commission_inr)
        .bind(figures.cdp_fee_pct)
        .bind(figures.cdp_fee_inr)
        .bind(figures.sale_date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Overwrite a sale
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        figures: &SalesFigures,
    ) -> AppResult<Option<SalesRecord>> {
        let record = sqlx::query_as::<_, SalesRecord>(
            r#"
            UPDATE sales_data
            SET client_id = $2, product_id = $3, broker_id = $4, channel_type = $5,
                nbp_inr = $6, gwp_inr = $7, nbp_usd = $8, gwp_usd = $9,
                broker_commission_pct = $10, broker_commission_inr = $11,
                cdp_fee_pct = $12, cdp_fee_inr = $13, sale_date = $14
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(figures.client_id)
        .bind(figures.product_id)
        .bind(figures.broker_id)
        .bind(&figures.channel_type)
        .bind(figures.nbp_inr)
        .bind(figures.gwp_inr)
        .bind(figures.nbp_usd)
        .bind(figures.gwp_usd)
        .bind(figures.broker_commission_pct)
        .bind(figures.broker_commission_inr)
        .bind(figures.cdp_fee_pct)
        .bind(figures.cdp_fee_inr)
        .bind(figures.sale_date)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a sale
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM sales_data WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
