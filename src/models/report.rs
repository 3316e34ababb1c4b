//! Reporting models

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Resolved report filter; `None` means the column is not filtered
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFilter {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub client_id: Option<Uuid>,
    pub product_id: Option<Uuid>,
    pub broker_id: Option<Uuid>,
    pub channel_type: Option<String>,
}

/// Raw sums over the filtered sales rows
#[derive(Debug, Clone, Default, FromRow)]
pub struct SalesTotals {
    pub total_gwp_inr: f64,
    pub total_nbp_inr: f64,
    pub total_broker_commission_inr: f64,
    pub total_cdp_fee_inr: f64,
}

/// Dashboard headline figures in INR and USD
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_gwp_inr: f64,
    pub total_nbp_inr: f64,
    pub total_gwp_usd: f64,
    pub total_nbp_usd: f64,
    pub total_broker_commission_inr: f64,
    pub total_broker_commission_usd: f64,
    pub total_cdp_fee_inr: f64,
    pub total_cdp_fee_usd: f64,
    pub exchange_rate: f64,
}

/// One (month, product, broker, channel) aggregate
#[derive(Debug, Clone, FromRow)]
pub struct MonthlyTrendRow {
    /// `YYYY-MM`
    pub month: String,
    pub product_name: String,
    pub broker_name: String,
    pub channel_type: String,
    pub total_gwp_inr: f64,
    pub total_commission_inr: f64,
    pub total_cdp_fee_inr: f64,
}

/// Labelled series aligned to a list of months
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
}

/// Chart-ready monthly trends
#[derive(Debug, Clone, Default, Serialize)]
pub struct MonthlyTrends {
    pub months: Vec<String>,
    /// GWP per product / broker / channel combination
    pub gwp_series: Vec<ChartSeries>,
    /// Broker commission and CDP fee totals per month
    pub commission_vs_fee: Vec<ChartSeries>,
}

/// One (client, product, broker, channel) aggregate
#[derive(Debug, Clone, FromRow)]
pub struct CommissionRow {
    pub client_id: Uuid,
    pub client_name: String,
    pub product_id: Uuid,
    pub product_name: String,
    pub broker_id: Uuid,
    pub broker_name: String,
    pub channel_type: String,
    pub total_gwp_inr: f64,
    pub avg_commission_pct: f64,
    pub total_commission_inr: f64,
    pub avg_cdp_fee_pct: f64,
    pub total_cdp_fee_inr: f64,
}

/// Detail line under a client in the commission report
#[derive(Debug, Clone, Serialize)]
pub struct CommissionDetail {
    pub product_id: Uuid,
    pub product_name: String,
    pub broker_id: Uuid,
    pub broker_name: String,
    pub channel_type: String,
    pub gwp_inr: f64,
    pub commission_pct: f64,
    pub commission_inr: f64,
    pub cdp_fee_pct: f64,
    pub cdp_fee_inr: f64,
}

/// Client summary with its detail lines
#[derive(Debug, Clone, Serialize)]
pub struct ClientCommission {
    pub id: Uuid,
    pub name: String,
    pub total_gwp_inr: f64,
    pub total_commission_inr: f64,
    pub total_cdp_fee_inr: f64,
    /// Weighted by GWP: total commission / total GWP * 100
    pub avg_commission_pct: f64,
    pub avg_cdp_fee_pct: f64,
    pub details: Vec<CommissionDetail>,
}
