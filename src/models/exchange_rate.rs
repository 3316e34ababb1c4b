//! Exchange rate model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// INR per USD on a given date
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub id: Uuid,
    pub date: NaiveDate,
    pub rate: f64,
    pub created_at: DateTime<Utc>,
}
