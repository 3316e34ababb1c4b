//! Exchange rate service

use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::info;

use crate::{
    db::repositories::ExchangeRateRepository,
    error::{AppError, AppResult},
    models::ExchangeRate,
    utils::today,
};

/// Exchange rate service for business logic
pub struct ExchangeRateService;

impl ExchangeRateService {
    /// Newest stored rate; stores `default_rate` dated today when none exists
    pub async fn latest_or_seed(pool: &PgPool, default_rate: f64) -> AppResult<ExchangeRate> {
        if let Some(rate) = ExchangeRateRepository::latest(pool).await? {
            return Ok(rate);
        }

        info!(rate = default_rate, "No exchange rate stored, recording default");
        ExchangeRateRepository::create(pool, today(), default_rate).await
    }

    /// INR per USD from the newest stored rate, or `default_rate`
    pub async fn current_rate(pool: &PgPool, default_rate: f64) -> AppResult<f64> {
        Ok(ExchangeRateRepository::latest(pool)
            .await?
            .map(|r| r.rate)
            .unwrap_or(default_rate))
    }

    /// Record a rate; the date defaults to today
    pub async fn create_rate(
        pool: &PgPool,
        rate: f64,
        date: Option<NaiveDate>,
    ) -> AppResult<ExchangeRate> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(AppError::Validation(
                "Exchange rate must be greater than zero".to_string(),
            ));
        }

        ExchangeRateRepository::create(pool, date.unwrap_or_else(today), rate).await
    }
}
