//! Sales record request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create or update sales record request
///
/// Only the entered values are accepted; USD amounts, commission and fee
/// amounts are derived. Omitted percentages default to the product's.
#[derive(Debug, Deserialize, Validate)]
pub struct SalesRequest {
    pub client_id: Uuid,
    pub product_id: Uuid,
    pub broker_id: Uuid,

    #[validate(length(min = 1))]
    pub channel_type: String,

    #[validate(range(min = 0.0))]
    pub nbp_inr: f64,

    #[validate(range(min = 0.0))]
    pub gwp_inr: f64,

    #[validate(range(min = 0.0, max = 100.0))]
    pub broker_commission_pct: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0))]
    pub cdp_fee_pct: Option<f64>,

    pub sale_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_are_optional() {
        let request: SalesRequest = serde_json::from_value(serde_json::json!({
            "client_id": Uuid::new_v4(),
            "product_id": Uuid::new_v4(),
            "broker_id": Uuid::new_v4(),
            "channel_type": "Online",
            "nbp_inr": 100000.0,
            "gwp_inr": 118000.0,
            "sale_date": "2024-03-15",
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert!(request.broker_commission_pct.is_none());
        assert_eq!(request.sale_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let request: SalesRequest = serde_json::from_value(serde_json::json!({
            "client_id": Uuid::new_v4(),
            "product_id": Uuid::new_v4(),
            "broker_id": Uuid::new_v4(),
            "channel_type": "Phygital",
            "nbp_inr": -1.0,
            "gwp_inr": 10.0,
            "broker_commission_pct": 150.0,
            "sale_date": "2024-03-15",
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("nbp_inr"));
        assert!(fields.contains_key("broker_commission_pct"));
    }
}
