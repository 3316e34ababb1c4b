//! Sales lead service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::SalesLeadRepository,
    error::{AppError, AppResult},
    handlers::sales_leads::request::SalesLeadRequest,
    models::SalesLead,
    utils::validate_phone,
};

/// Sales lead service for business logic
pub struct SalesLeadService;

impl SalesLeadService {
    pub async fn list_sales_leads(pool: &PgPool) -> AppResult<Vec<SalesLead>> {
        SalesLeadRepository::list(pool).await
    }

    pub async fn get_sales_lead(pool: &PgPool, id: &Uuid) -> AppResult<SalesLead> {
        SalesLeadRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sales lead not found".to_string()))
    }

    pub async fn create_sales_lead(pool: &PgPool, payload: SalesLeadRequest) -> AppResult<SalesLead> {
        validate_phone(&payload.phone).map_err(|e| AppError::Validation(e.to_string()))?;

        SalesLeadRepository::create(
            pool,
            payload.name.trim(),
            payload.email.trim(),
            payload.phone.trim(),
        )
        .await
    }

    pub async fn update_sales_lead(
        pool: &PgPool,
        id: &Uuid,
        payload: SalesLeadRequest,
    ) -> AppResult<SalesLead> {
        validate_phone(&payload.phone).map_err(|e| AppError::Validation(e.to_string()))?;

        SalesLeadRepository::update(
            pool,
            id,
            payload.name.trim(),
            payload.email.trim(),
            payload.phone.trim(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Sales lead not found".to_string()))
    }

    pub async fn delete_sales_lead(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !SalesLeadRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Sales lead not found".to_string()));
        }
        Ok(())
    }
}
