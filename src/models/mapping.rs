//! Client-product mapping model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Which broker and sales lead serve a client for a product, and through which channel
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ClientProductMap {
    pub id: Uuid,
    pub client_id: Uuid,
    pub product_id: Uuid,
    pub broker_id: Uuid,
    pub sales_lead_id: Uuid,
    pub channel_type: String,
    pub start_date: NaiveDate,
}

/// Mapping joined with the display names of everything it references
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientProductMapDetail {
    pub id: Uuid,
    pub client_id: Uuid,
    pub product_id: Uuid,
    pub broker_id: Uuid,
    pub sales_lead_id: Uuid,
    pub channel_type: String,
    pub start_date: NaiveDate,
    pub client_name: String,
    pub product_name: String,
    pub broker_name: String,
    pub sales_lead_name: String,
}

/// Id/name pair used by form pickers
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NamedOption {
    pub id: Uuid,
    pub name: String,
}
