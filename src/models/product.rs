//! Insurance product model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Insurance product with its default commission and platform fee
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub insurer_name: String,
    pub base_commission_pct: f64,
    pub cdp_fee_pct: f64,
}
