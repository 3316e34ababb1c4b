//! Sales record model and commission arithmetic

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One sale as stored in `sales_data`
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SalesRecord {
    pub id: Uuid,
    pub client_id: Uuid,
    pub product_id: Uuid,
    pub broker_id: Uuid,
    pub channel_type: String,
    pub nbp_inr: f64,
    pub gwp_inr: f64,
    pub nbp_usd: f64,
    pub gwp_usd: f64,
    pub broker_commission_pct: f64,
    pub broker_commission_inr: f64,
    pub cdp_fee_pct: f64,
    pub cdp_fee_inr: f64,
    pub sale_date: NaiveDate,
}

/// Sale joined with client, product and broker names
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SalesRecordDetail {
    pub id: Uuid,
    pub client_id: Uuid,
    pub product_id: Uuid,
    pub broker_id: Uuid,
    pub channel_type: String,
    pub nbp_inr: f64,
    pub gwp_inr: f64,
    pub nbp_usd: f64,
    pub gwp_usd: f64,
    pub broker_commission_pct: f64,
    pub broker_commission_inr: f64,
    pub cdp_fee_pct: f64,
    pub cdp_fee_inr: f64,
    pub sale_date: NaiveDate,
    pub client_name: String,
    pub product_name: String,
    pub broker_name: String,
}

/// Column values written for a sale, with every derived amount filled in
#[derive(Debug, Clone, PartialEq)]
pub struct SalesFigures {
    pub client_id: Uuid,
    pub product_id: Uuid,
    pub broker_id: Uuid,
    pub channel_type: String,
    pub nbp_inr: f64,
    pub gwp_inr: f64,
    pub nbp_usd: f64,
    pub gwp_usd: f64,
    pub broker_commission_pct: f64,
    pub broker_commission_inr: f64,
    pub cdp_fee_pct: f64,
    pub cdp_fee_inr: f64,
    pub sale_date: NaiveDate,
}

/// Entered values before derivation
#[derive(Debug, Clone)]
pub struct SalesInput {
    pub client_id: Uuid,
    pub product_id: Uuid,
    pub broker_id: Uuid,
    pub channel_type: String,
    pub nbp_inr: f64,
    pub gwp_inr: f64,
    pub sale_date: NaiveDate,
}

impl SalesFigures {
    /// Compute USD amounts from `inr_per_usd` and commission/fee amounts from GWP.
    ///
    /// All derived values are rounded to two decimals.
    pub fn derive(
        input: SalesInput,
        broker_commission_pct: f64,
        cdp_fee_pct: f64,
        inr_per_usd: f64,
    ) -> Self {
        let (nbp_usd, gwp_usd) = if inr_per_usd > 0.0 {
            (
                round2(input.nbp_inr / inr_per_usd),
                round2(input.gwp_inr / inr_per_usd),
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            client_id: input.client_id,
            product_id: input.product_id,
            broker_id: input.broker_id,
            channel_type: input.channel_type,
            nbp_inr: input.nbp_inr,
            gwp_inr: input.gwp_inr,
            nbp_usd,
            gwp_usd,
            broker_commission_pct,
            broker_commission_inr: round2(input.gwp_inr * broker_commission_pct / 100.0),
            cdp_fee_pct,
            cdp_fee_inr: round2(input.gwp_inr * cdp_fee_pct / 100.0),
            sale_date: input.sale_date,
        }
    }
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(nbp_inr: f64, gwp_inr: f64) -> SalesInput {
        SalesInput {
            client_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            broker_id: Uuid::new_v4(),
            channel_type: "Online".to_string(),
            nbp_inr,
            gwp_inr,
            sale_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_derive_commission_and_fee() {
        let figures = SalesFigures::derive(input(50_000.0, 125_000.0), 12.5, 2.0, 83.5);

        assert_eq!(figures.broker_commission_inr, 15_625.0);
        assert_eq!(figures.cdp_fee_inr, 2_500.0);
        assert_eq!(figures.gwp_usd, 1_497.01);
        assert_eq!(figures.nbp_usd, 598.8);
    }

    #[test]
    fn test_derive_rounds_to_cents() {
        let figures = SalesFigures::derive(input(0.0, 333.33), 7.5, 1.25, 83.5);

        assert_eq!(figures.broker_commission_inr, 25.0);
        assert_eq!(figures.cdp_fee_inr, 4.17);
    }

    #[test]
    fn test_derive_with_non_positive_rate() {
        let figures = SalesFigures::derive(input(1_000.0, 2_000.0), 10.0, 1.0, 0.0);

        assert_eq!(figures.gwp_usd, 0.0);
        assert_eq!(figures.nbp_usd, 0.0);
        assert_eq!(figures.broker_commission_inr, 200.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(-3.456), -3.46);
    }
}
