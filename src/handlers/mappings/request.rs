//! Client-product mapping request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create or update mapping request
#[derive(Debug, Deserialize, Validate)]
pub struct MappingRequest {
    pub client_id: Uuid,
    pub product_id: Uuid,
    pub broker_id: Uuid,
    pub sales_lead_id: Uuid,

    /// Online or Phygital
    #[validate(length(min = 1))]
    pub channel_type: String,

    pub start_date: NaiveDate,
}
