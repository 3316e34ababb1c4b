//! Sales data service
//!
//! Derived columns (USD amounts, commission and fee amounts) are always
//! computed here from the entered values; clients cannot set them.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ProductRepository, SalesRepository},
    error::{AppError, AppResult},
    handlers::sales::request::SalesRequest,
    models::{SalesFigures, SalesInput, SalesRecord, SalesRecordDetail},
    services::ExchangeRateService,
    utils::{validate_channel_type, validation::{validate_amount, validate_percentage}},
};

/// Sales service for business logic
pub struct SalesService;

impl SalesService {
    /// Sales with names, newest first
    pub async fn list_sales(pool: &PgPool) -> AppResult<Vec<SalesRecordDetail>> {
        SalesRepository::list_detailed(pool).await
    }

    pub async fn get_sale(pool: &PgPool, id: &Uuid) -> AppResult<SalesRecord> {
        SalesRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sales record not found".to_string()))
    }

    pub async fn create_sale(
        pool: &PgPool,
        default_rate: f64,
        payload: SalesRequest,
    ) -> AppResult<SalesRecord> {
        let figures = Self::figures(pool, default_rate, payload).await?;
        SalesRepository::create(pool, &figures).await
    }

    pub async fn update_sale(
        pool: &PgPool,
        default_rate: f64,
        id: &Uuid,
        payload: SalesRequest,
    ) -> AppResult<SalesRecord> {
        Self::get_sale(pool, id).await?;

        let figures = Self::figures(pool, default_rate, payload).await?;
        SalesRepository::update(pool, id, &figures)
            .await?
            .ok_or_else(|| AppError::NotFound("Sales record not found".to_string()))
    }

    pub async fn delete_sale(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !SalesRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Sales record not found".to_string()));
        }
        Ok(())
    }

    /// Validate the entered values and derive the rest
    async fn figures(
        pool: &PgPool,
        default_rate: f64,
        payload: SalesRequest,
    ) -> AppResult<SalesFigures> {
        let invalid = |e: &str| AppError::Validation(e.to_string());

        validate_channel_type(&payload.channel_type).map_err(invalid)?;
        validate_amount(payload.nbp_inr).map_err(invalid)?;
        validate_amount(payload.gwp_inr).map_err(invalid)?;

        let product = ProductRepository::find_by_id(pool, &payload.product_id)
            .await?
            .ok_or_else(|| AppError::Validation("Unknown product".to_string()))?;

        let commission_pct = payload
            .broker_commission_pct
            .unwrap_or(product.base_commission_pct);
        let cdp_fee_pct = payload.cdp_fee_pct.unwrap_or(product.cdp_fee_pct);
        validate_percentage(commission_pct).map_err(invalid)?;
        validate_percentage(cdp_fee_pct).map_err(invalid)?;

        let rate = ExchangeRateService::current_rate(pool, default_rate).await?;

        Ok(SalesFigures::derive(
            SalesInput {
                client_id: payload.client_id,
                product_id: payload.product_id,
                broker_id: payload.broker_id,
                channel_type: payload.channel_type,
                nbp_inr: payload.nbp_inr,
                gwp_inr: payload.gwp_inr,
                sale_date: payload.sale_date,
            },
            commission_pct,
            cdp_fee_pct,
            rate,
        ))
    }
}
