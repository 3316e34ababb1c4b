//! Product repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{NamedOption, Product},
};

/// Repository for insurance products
pub struct ProductRepository;

impl ProductRepository {
    /// List products ordered by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(r#"SELECT * FROM products ORDER BY name ASC"#)
            .fetch_all(pool)
            .await?;

        Ok(products)
    }

    /// Id/name pairs for pickers
    pub async fn options(pool: &PgPool) -> AppResult<Vec<NamedOption>> {
        let options =
            sqlx::query_as::<_, NamedOption>(r#"SELECT id, name FROM products ORDER BY name ASC"#)
                .fetch_all(pool)
                .await?;

        Ok(options)
    }

    /// Find product by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(r#"SELECT * FROM products WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(product)
    }

    /// Create a product
    pub async fn create(
        pool: &PgPool,
        name: &str,
        category: &str,
        insurer_name: &str,
        base_commission_pct: f64,
        cdp_fee_pct: f64,
    ) -> AppResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, category, insurer_name, base_commission_pct, cdp_fee_pct)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(category)
        .bind(insurer_name)
        .bind(base_commission_pct)
        .bind(cdp_fee_pct)
        .fetch_one(pool)
        .await?;

        Ok(product)
    }

    /// Update a product
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: &str,
        category: &str,
        insurer_name: &str,
        base_commission_pct: f64,
        cdp_fee_pct: f64,
    ) -> AppResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $2, category = $3, insurer_name = $4,
                base_commission_pct = $5, cdp_fee_pct = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(category)
        .bind(insurer_name)
        .bind(base_commission_pct)
        .bind(cdp_fee_pct)
        .fetch_optional(pool)
        .await?;

        Ok(product)
    }

    /// Delete a product
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM products WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
