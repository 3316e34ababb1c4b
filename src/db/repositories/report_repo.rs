//! Reporting queries
//!
//! Every filter value is bound as a parameter; only fixed SQL fragments are
//! pushed as text.

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::AppResult,
    models::{CommissionRow, MonthlyTrendRow, ReportFilter, SalesTotals},
};

/// Repository for aggregate sales reports
pub struct ReportRepository;

impl ReportRepository {
    /// Sums over the filtered sales rows (zeros when nothing matches)
    pub async fn totals(pool: &PgPool, filter: &ReportFilter) -> AppResult<SalesTotals> {
        let mut query = totals_query(filter);
        let totals = query
            .build_query_as::<SalesTotals>()
            .fetch_one(pool)
            .await?;

        Ok(totals)
    }

    /// Monthly aggregates per product, broker and channel
    pub async fn monthly_trends(
        pool: &PgPool,
        filter: &ReportFilter,
    ) -> AppResult<Vec<MonthlyTrendRow>> {
        let mut query = monthly_trends_query(filter);
        let rows = query
            .build_query_as::<MonthlyTrendRow>()
            .fetch_all(pool)
            .await?;

        Ok(rows)
    }

    /// Aggregates per client, product, broker and channel
    pub async fn commission_rows(
        pool: &PgPool,
        filter: &ReportFilter,
    ) -> AppResult<Vec<CommissionRow>> {
        let mut query = commission_query(filter);
        let rows = query
            .build_query_as::<CommissionRow>()
            .fetch_all(pool)
            .await?;

        Ok(rows)
    }
}

/// Append the `WHERE` clause for `filter` over `sales_data s`
fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &ReportFilter) {
    query.push(" WHERE s.sale_date >= ");
    query.push_bind(filter.from);
    query.push(" AND s.sale_date <= ");
    query.push_bind(filter.to);

    if let Some(client_id) = filter.client_id {
        query.push(" AND s.client_id = ");
        query.push_bind(client_id);
    }
    if let Some(product_id) = filter.product_id {
        query.push(" AND s.product_id = ");
        query.push_bind(product_id);
    }
    if let Some(broker_id) = filter.broker_id {
        query.push(" AND s.broker_id = ");
        query.push_bind(broker_id);
    }
    if let Some(channel_type) = &filter.channel_type {
        query.push(" AND s.channel_type = ");
        query.push_bind(channel_type.clone());
    }
}

fn totals_query(filter: &ReportFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(
        r#"
        SELECT
            COALESCE(SUM(s.gwp_inr), 0)::DOUBLE PRECISION AS total_gwp_inr,
            COALESCE(SUM(s.nbp_inr), 0)::DOUBLE PRECISION AS total_nbp_inr,
            COALESCE(SUM(s.broker_commission_inr), 0)::DOUBLE PRECISION AS total_broker_commission_inr,
            COALESCE(SUM(s.cdp_fee_inr), 0)::DOUBLE PRECISION AS total_cdp_fee_inr
        FROM sales_data s"#,
    );
    push_filter(&mut query, filter);
    query
}

fn monthly_trends_query(filter: &ReportFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(
        r#"
        SELECT
            TO_CHAR(s.sale_date, 'YYYY-MM') AS month,
            p.name AS product_name,
            b.name AS broker_name,
            s.channel_type,
            SUM(s.gwp_inr) AS total_gwp_inr,
            SUM(s.broker_commission_inr) AS total_commission_inr,
            SUM(s.cdp_fee_inr) AS total_cdp_fee_inr
        FROM sales_data s
        JOIN products p ON p.id = s.product_id
        JOIN brokers b ON b.id = s.broker_id"#,
    );
    push_filter(&mut query, filter);
    query.push(
        " GROUP BY month, p.name, b.name, s.channel_type ORDER BY month, p.name, b.name, s.channel_type",
    );
    query
}

fn commission_query(filter: &ReportFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(
        r#"
        SELECT
            c.id AS client_id,
            c.name AS client_name,
            p.id AS product_id,
            p.name AS product_name,
            b.id AS broker_id,
            b.name AS broker_name,
            s.channel_type,
            SUM(s.gwp_inr) AS total_gwp_inr,
            AVG(s.broker_commission_pct) AS avg_commission_pct,
            SUM(s.broker_commission_inr) AS total_commission_inr,
            AVG(s.cdp_fee_pct) AS avg_cdp_fee_pct,
            SUM(s.cdp_fee_inr) AS total_cdp_fee_inr
        FROM sales_data s
        JOIN clients c ON c.id = s.client_id
        JOIN products p ON p.id = s.product_id
        JOIN brokers b ON b.id = s.broker_id"#,
    );
    push_filter(&mut query, filter);
    query.push(
        " GROUP BY c.id, c.name, p.id, p.name, b.id, b.name, s.channel_type \
         ORDER BY c.name, p.name, b.name, s.channel_type",
    );
    query
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;

    fn filter() -> ReportFilter {
        ReportFilter {
            from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            client_id: None,
            product_id: None,
            broker_id: None,
            channel_type: None,
        }
    }

    #[test]
    fn test_date_range_only() {
        let query = totals_query(&filter());
        let sql = query.sql();

        assert!(sql.contains("WHERE s.sale_date >= $1 AND s.sale_date <= $2"));
        assert!(!sql.contains("$3"));
        assert!(!sql.contains("2024-01-01"));
    }

    #[test]
    fn test_all_filters_are_bound() {
        let mut f = filter();
        f.client_id = Some(Uuid::new_v4());
        f.product_id = Some(Uuid::new_v4());
        f.broker_id = Some(Uuid::new_v4());
        f.channel_type = Some("Online' OR '1'='1".to_string());

        let query = commission_query(&f);
        let sql = query.sql();

        assert!(sql.contains("s.client_id = $3"));
        assert!(sql.contains("s.product_id = $4"));
        assert!(sql.contains("s.broker_id = $5"));
        assert!(sql.contains("s.channel_type = $6"));
        assert!(!sql.contains("Online"));
        assert!(sql.trim_end().ends_with("ORDER BY c.name, p.name, b.name, s.channel_type"));
    }

    #[test]
    fn test_trends_group_after_filter() {
        let mut f = filter();
        f.channel_type = Some("Phygital".to_string());

        let query = monthly_trends_query(&f);
        let sql = query.sql();

        let where_at = sql.find("WHERE").unwrap();
        let group_at = sql.find("GROUP BY month").unwrap();
        assert!(where_at < group_at);
        assert!(sql.contains("TO_CHAR(s.sale_date, 'YYYY-MM') AS month"));
        assert!(sql.contains("s.channel_type = $3"));
    }
}
