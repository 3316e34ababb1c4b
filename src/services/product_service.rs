//! Product service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::ProductRepository,
    error::{AppError, AppResult},
    handlers::products::request::ProductRequest,
    models::Product,
};

/// Product service for business logic
pub struct ProductService;

impl ProductService {
    pub async fn list_products(pool: &PgPool) -> AppResult<Vec<Product>> {
        ProductRepository::list(pool).await
    }

    pub async fn get_product(pool: &PgPool, id: &Uuid) -> AppResult<Product> {
        ProductRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    pub async fn create_product(pool: &PgPool, payload: ProductRequest) -> AppResult<Product> {
        ProductRepository::create(
            pool,
            payload.name.trim(),
            payload.category.trim(),
            payload.insurer_name.trim(),
            payload.base_commission_pct,
            payload.cdp_fee_pct,
        )
        .await
    }

    pub async fn update_product(
        pool: &PgPool,
        id: &Uuid,
        payload: ProductRequest,
    ) -> AppResult<Product> {
        ProductRepository::update(
            pool,
            id,
            payload.name.trim(),
            payload.category.trim(),
            payload.insurer_name.trim(),
            payload.base_commission_pct,
            payload.cdp_fee_pct,
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    pub async fn delete_product(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !ProductRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Product not found".to_string()));
        }
        Ok(())
    }
}
