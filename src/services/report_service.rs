//! Reporting service
//!
//! Runs the aggregate queries and reshapes their rows into chart series and
//! the client/detail commission tree.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use sqlx::PgPool;

use crate::{
    constants::FILTER_ALL,
    db::repositories::ReportRepository,
    error::AppResult,
    models::{
        ChartSeries, ClientCommission, CommissionDetail, CommissionRow, DashboardSummary,
        MonthlyTrendRow, MonthlyTrends, ReportFilter, SalesTotals,
    },
    services::ExchangeRateService,
    utils::to_csv,
};

/// Header of the commission CSV export
pub const COMMISSION_CSV_HEADERS: [&str; 9] = [
    "Client",
    "Product",
    "Broker",
    "Channel",
    "GWP (INR)",
    "Commission %",
    "Commission (INR)",
    "CDP Fee %",
    "CDP Fee (INR)",
];

/// Reporting service
pub struct ReportService;

impl ReportService {
    /// Dashboard totals with USD equivalents at the latest rate
    pub async fn dashboard(
        pool: &PgPool,
        filter: &ReportFilter,
        default_rate: f64,
    ) -> AppResult<DashboardSummary> {
        let totals = ReportRepository::totals(pool, filter).await?;
        let rate = ExchangeRateService::current_rate(pool, default_rate).await?;
        Ok(summarize(&totals, rate))
    }

    /// Monthly GWP and commission/fee series
    pub async fn monthly_trends(pool: &PgPool, filter: &ReportFilter) -> AppResult<MonthlyTrends> {
        let rows = ReportRepository::monthly_trends(pool, filter).await?;
        Ok(build_monthly_trends(&rows))
    }

    /// Commission report grouped by client
    pub async fn commission_report(
        pool: &PgPool,
        filter: &ReportFilter,
    ) -> AppResult<Vec<ClientCommission>> {
        let rows = ReportRepository::commission_rows(pool, filter).await?;
        Ok(build_commission_report(rows))
    }

    /// Commission report rendered as CSV
    pub async fn commission_csv(pool: &PgPool, filter: &ReportFilter) -> AppResult<String> {
        let clients = Self::commission_report(pool, filter).await?;
        to_csv(&COMMISSION_CSV_HEADERS, commission_csv_rows(&clients))
    }
}

/// Convert INR totals to the dashboard summary
pub fn summarize(totals: &SalesTotals, rate: f64) -> DashboardSummary {
    let usd = |inr: f64| if rate > 0.0 { inr / rate } else { 0.0 };

    DashboardSummary {
        total_gwp_inr: totals.total_gwp_inr,
        total_nbp_inr: totals.total_nbp_inr,
        total_gwp_usd: usd(totals.total_gwp_inr),
        total_nbp_usd: usd(totals.total_nbp_inr),
        total_broker_commission_inr: totals.total_broker_commission_inr,
        total_broker_commission_usd: usd(totals.total_broker_commission_inr),
        total_cdp_fee_inr: totals.total_cdp_fee_inr,
        total_cdp_fee_usd: usd(totals.total_cdp_fee_inr),
        exchange_rate: rate,
    }
}

/// Reshape monthly rows into series aligned to the sorted month list.
///
/// One GWP series per product / broker / channel in first-seen order, with 0
/// for months that have no row; plus per-month commission and fee totals.
pub fn build_monthly_trends(rows: &[MonthlyTrendRow]) -> MonthlyTrends {
    let months: Vec<String> = rows
        .iter()
        .map(|r| r.month.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let index: HashMap<&str, usize> = months
        .iter()
        .enumerate()
        .map(|(i, m)| (m.as_str(), i))
        .collect();

    let mut gwp_series: Vec<ChartSeries> = Vec::new();
    let mut series_at: HashMap<String, usize> = HashMap::new();
    let mut commission = vec![0.0; months.len()];
    let mut fee = vec![0.0; months.len()];

    for row in rows {
        let Some(&month) = index.get(row.month.as_str()) else {
            continue;
        };

        let label = format!("{} / {} / {}", row.product_name, row.broker_name, row.channel_type);
        let at = *series_at.entry(label.clone()).or_insert_with(|| {
            gwp_series.push(ChartSeries {
                label,
                data: vec![0.0; months.len()],
            });
            gwp_series.len() - 1
        });
        gwp_series[at].data[month] = row.total_gwp_inr;

        commission[month] += row.total_commission_inr;
        fee[month] += row.total_cdp_fee_inr;
    }

    MonthlyTrends {
        months,
        gwp_series,
        commission_vs_fee: vec![
            ChartSeries {
                label: "Broker Commission".to_string(),
                data: commission,
            },
            ChartSeries {
                label: "CDP Fee".to_string(),
                data: fee,
            },
        ],
    }
}

/// Group commission rows under their client, in first-seen order.
///
/// Client percentages are weighted by GWP: total / total GWP * 100, or 0
/// when the client has no GWP.
pub fn build_commission_report(rows: Vec<CommissionRow>) -> Vec<ClientCommission> {
    let mut clients: Vec<ClientCommission> = Vec::new();
    let mut position: BTreeMap<uuid::Uuid, usize> = BTreeMap::new();

    for row in rows {
        let at = *position.entry(row.client_id).or_insert_with(|| {
            clients.push(ClientCommission {
                id: row.client_id,
                name: row.client_name.clone(),
                total_gwp_inr: 0.0,
                total_commission_inr: 0.0,
                total_cdp_fee_inr: 0.0,
                avg_commission_pct: 0.0,
                avg_cdp_fee_pct: 0.0,
                details: Vec::new(),
            });
            clients.len() - 1
        });

        let client = &mut clients[at];
        client.total_gwp_inr += row.total_gwp_inr;
        client.total_commission_inr += row.total_commission_inr;
        client.total_cdp_fee_inr += row.total_cdp_fee_inr;
        client.details.push(CommissionDetail {
            product_id: row.product_id,
            product_name: row.product_name,
            broker_id: row.broker_id,
            broker_name: row.broker_name,
            channel_type: row.channel_type,
            gwp_inr: row.total_gwp_inr,
            commission_pct: row.avg_commission_pct,
            commission_inr: row.total_commission_inr,
            cdp_fee_pct: row.avg_cdp_fee_pct,
            cdp_fee_inr: row.total_cdp_fee_inr,
        });
    }

    for client in &mut clients {
        if client.total_gwp_inr > 0.0 {
            client.avg_commission_pct = client.total_commission_inr / client.total_gwp_inr * 100.0;
            client.avg_cdp_fee_pct = client.total_cdp_fee_inr / client.total_gwp_inr * 100.0;
        }
    }

    clients
}

/// Flatten the report: a summary row per client followed by its details
pub fn commission_csv_rows(clients: &[ClientCommission]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for client in clients {
        rows.push(vec![
            client.name.clone(),
            "All Products".to_string(),
            "All Brokers".to_string(),
            "All Channels".to_string(),
            client.total_gwp_inr.to_string(),
            client.avg_commission_pct.to_string(),
            client.total_commission_inr.to_string(),
            client.avg_cdp_fee_pct.to_string(),
            client.total_cdp_fee_inr.to_string(),
        ]);

        for detail in &client.details {
            rows.push(vec![
                client.name.clone(),
                detail.product_name.clone(),
                detail.broker_name.clone(),
                detail.channel_type.clone(),
                detail.gwp_inr.to_string(),
                detail.commission_pct.to_string(),
                detail.commission_inr.to_string(),
                detail.cdp_fee_pct.to_string(),
                detail.cdp_fee_inr.to_string(),
            ]);
        }
    }

    rows
}

/// `None` for an absent, empty or `all` filter value
pub fn filter_value(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(FILTER_ALL))
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn trend(month: &str, product: &str, gwp: f64, commission: f64, fee: f64) -> MonthlyTrendRow {
        MonthlyTrendRow {
            month: month.to_string(),
            product_name: product.to_string(),
            broker_name: "Marsh".to_string(),
            channel_type: "Online".to_string(),
            total_gwp_inr: gwp,
            total_commission_inr: commission,
            total_cdp_fee_inr: fee,
        }
    }

    fn commission_row(client_id: Uuid, client: &str, product: &str, gwp: f64, commission: f64, fee: f64) -> CommissionRow {
        CommissionRow {
            client_id,
            client_name: client.to_string(),
            product_id: Uuid::new_v4(),
            product_name: product.to_string(),
            broker_id: Uuid::new_v4(),
            broker_name: "Aon".to_string(),
            channel_type: "Phygital".to_string(),
            total_gwp_inr: gwp,
            avg_commission_pct: 10.0,
            total_commission_inr: commission,
            avg_cdp_fee_pct: 2.0,
            total_cdp_fee_inr: fee,
        }
    }

    #[test]
    fn test_trends_align_series_to_months() {
        let rows = vec![
            trend("2024-02", "Health", 200.0, 20.0, 4.0),
            trend("2024-01", "Health", 100.0, 10.0, 2.0),
            trend("2024-03", "Motor", 300.0, 30.0, 6.0),
            trend("2024-03", "Health", 50.0, 5.0, 1.0),
        ];

        let trends = build_monthly_trends(&rows);

        assert_eq!(trends.months, vec!["2024-01", "2024-02", "2024-03"]);
        assert_eq!(trends.gwp_series.len(), 2);
        assert_eq!(trends.gwp_series[0].label, "Health / Marsh / Online");
        assert_eq!(trends.gwp_series[0].data, vec![100.0, 200.0, 50.0]);
        assert_eq!(trends.gwp_series[1].label, "Motor / Marsh / Online");
        assert_eq!(trends.gwp_series[1].data, vec![0.0, 0.0, 300.0]);

        assert_eq!(trends.commission_vs_fee[0].label, "Broker Commission");
        assert_eq!(trends.commission_vs_fee[0].data, vec![10.0, 20.0, 35.0]);
        assert_eq!(trends.commission_vs_fee[1].label, "CDP Fee");
        assert_eq!(trends.commission_vs_fee[1].data, vec![2.0, 4.0, 7.0]);
    }

    #[test]
    fn test_trends_empty() {
        let trends = build_monthly_trends(&[]);
        assert!(trends.months.is_empty());
        assert!(trends.gwp_series.is_empty());
        assert_eq!(trends.commission_vs_fee.len(), 2);
        assert!(trends.commission_vs_fee[0].data.is_empty());
    }

    #[test]
    fn test_commission_report_groups_by_client() {
        let acme = Uuid::new_v4();
        let zenith = Uuid::new_v4();
        let rows = vec![
            commission_row(acme, "Acme", "Health", 1000.0, 100.0, 20.0),
            commission_row(acme, "Acme", "Motor", 3000.0, 150.0, 30.0),
            commission_row(zenith, "Zenith", "Health", 0.0, 0.0, 0.0),
        ];

        let report = build_commission_report(rows);

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].id, acme);
        assert_eq!(report[0].details.len(), 2);
        assert_eq!(report[0].total_gwp_inr, 4000.0);
        assert_eq!(report[0].total_commission_inr, 250.0);
        assert_eq!(report[0].total_cdp_fee_inr, 50.0);
        assert!((report[0].avg_commission_pct - 6.25).abs() < 1e-9);
        assert!((report[0].avg_cdp_fee_pct - 1.25).abs() < 1e-9);

        assert_eq!(report[1].name, "Zenith");
        assert_eq!(report[1].avg_commission_pct, 0.0);
        assert_eq!(report[1].avg_cdp_fee_pct, 0.0);
    }

    #[test]
    fn test_csv_summary_row_precedes_details() {
        let acme = Uuid::new_v4();
        let report = build_commission_report(vec![
            commission_row(acme, "Acme \"Global\"", "Health", 1000.0, 100.0, 20.0),
        ]);

        let rows = commission_csv_rows(&report);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec!["Acme \"Global\"", "All Products", "All Brokers", "All Channels", "1000", "10", "100", "2", "20"]
        );
        assert_eq!(rows[1][1], "Health");
        assert_eq!(rows[1][3], "Phygital");

        let csv = to_csv(&COMMISSION_CSV_HEADERS, rows).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "\"Client\",\"Product\",\"Broker\",\"Channel\",\"GWP (INR)\",\"Commission %\",\"Commission (INR)\",\"CDP Fee %\",\"CDP Fee (INR)\""
        );
        assert!(lines.next().unwrap().starts_with("\"Acme \"\"Global\"\"\",\"All Products\""));
    }

    #[test]
    fn test_summarize_converts_to_usd() {
        let totals = SalesTotals {
            total_gwp_inr: 835_000.0,
            total_nbp_inr: 167_000.0,
            total_broker_commission_inr: 83_500.0,
            total_cdp_fee_inr: 0.0,
        };

        let summary = summarize(&totals, 83.5);
        assert_eq!(summary.total_gwp_usd, 10_000.0);
        assert_eq!(summary.total_nbp_usd, 2_000.0);
        assert_eq!(summary.total_broker_commission_usd, 1_000.0);
        assert_eq!(summary.total_cdp_fee_usd, 0.0);
        assert_eq!(summary.exchange_rate, 83.5);
    }

    #[test]
    fn test_filter_value() {
        assert_eq!(filter_value(None), None);
        assert_eq!(filter_value(Some("")), None);
        assert_eq!(filter_value(Some("all")), None);
        assert_eq!(filter_value(Some("ALL")), None);
        assert_eq!(filter_value(Some(" Online ")), Some("Online"));
    }
}
