//! Exchange rate repository

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{error::AppResult, models::ExchangeRate};

/// Newest date first; rates recorded for the same date resolve to the last one stored
const LATEST_RATE: &str = r#"
    SELECT id, date, rate, created_at
    FROM exchange_rates
    ORDER BY date DESC, created_at DESC
    LIMIT 1
"#;

/// Repository for INR/USD exchange rates
pub struct ExchangeRateRepository;

impl ExchangeRateRepository {
    /// Most recent rate
    pub async fn latest(pool: &PgPool) -> AppResult<Option<ExchangeRate>> {
        let rate = sqlx::query_as::<_, ExchangeRate>(LATEST_RATE)
            .fetch_optional(pool)
            .await?;

        Ok(rate)
    }

    /// Record a rate
    pub async fn create(pool: &PgPool, date: NaiveDate, rate: f64) -> AppResult<ExchangeRate> {
        let rate = sqlx::query_as::<_, ExchangeRate>(
            r#"
            INSERT INTO exchange_rates (date, rate)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(date)
        .bind(rate)
        .fetch_one(pool)
        .await?;

        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_day_rates_resolve_to_newest() {
        let order = LATEST_RATE
            .split("ORDER BY")
            .nth(1)
            .unwrap()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        assert_eq!(order, "date DESC, created_at DESC LIMIT 1");
    }
}
