//! Report request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::ReportFilter,
    services::report_service::filter_value,
    utils::{parse_date, validate_channel_type, validate_date_range, window_ending},
};

/// Report query parameters
///
/// Every value is optional. Empty values and the literal `all` disable the
/// corresponding filter.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub client_id: Option<String>,
    pub product_id: Option<String>,
    pub broker_id: Option<String>,
    pub channel_type: Option<String>,
}

impl ReportQuery {
    /// Resolve the query; missing dates cover `default_days` ending `today`
    pub fn into_filter(self, today: NaiveDate, default_days: i64) -> AppResult<ReportFilter> {
        let to = match filter_value(self.to.as_deref()) {
            Some(value) => parse_day("to", value)?,
            None => today,
        };
        let from = match filter_value(self.from.as_deref()) {
            Some(value) => parse_day("from", value)?,
            None => {
                window_ending(to, default_days)
                    .ok_or_else(|| {
                        AppError::InvalidInput("Report window is out of range".to_string())
                    })?
                    .0
            }
        };
        validate_date_range(from, to).map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let channel_type = filter_value(self.channel_type.as_deref()).map(str::to_string);
        if let Some(channel) = channel_type.as_deref() {
            validate_channel_type(channel).map_err(|e| AppError::InvalidInput(e.to_string()))?;
        }

        Ok(ReportFilter {
            from,
            to,
            client_id: parse_id("client_id", self.client_id.as_deref())?,
            product_id: parse_id("product_id", self.product_id.as_deref())?,
            broker_id: parse_id("broker_id", self.broker_id.as_deref())?,
            channel_type,
        })
    }
}

fn parse_day(name: &str, value: &str) -> AppResult<NaiveDate> {
    parse_date(value)
        .ok_or_else(|| AppError::InvalidInput(format!("{} must be a YYYY-MM-DD date", name)))
}

fn parse_id(name: &str, value: Option<&str>) -> AppResult<Option<Uuid>> {
    filter_value(value)
        .map(|v| {
            Uuid::parse_str(v).map_err(|_| AppError::InvalidInput(format!("Invalid {}", name)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use tokio_test::assert_err;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_to_window_ending_today() {
        let filter = ReportQuery::default().into_filter(day(2024, 6, 30), 30).unwrap();

        assert_eq!(filter.from, day(2024, 5, 31));
        assert_eq!(filter.to, day(2024, 6, 30));
        assert_eq!(filter.client_id, None);
        assert_eq!(filter.channel_type, None);
    }

    #[test]
    fn test_all_and_empty_disable_filters() {
        let query = ReportQuery {
            from: Some("2024-01-01".to_string()),
            to: Some("2024-03-31".to_string()),
            client_id: Some("all".to_string()),
            product_id: Some(String::new()),
            broker_id: Some("ALL".to_string()),
            channel_type: Some("all".to_string()),
        };

        let filter = query.into_filter(day(2024, 6, 30), 30).unwrap();
        assert_eq!(filter.from, day(2024, 1, 1));
        assert_eq!(filter.to, day(2024, 3, 31));
        assert_eq!(filter.client_id, None);
        assert_eq!(filter.product_id, None);
        assert_eq!(filter.broker_id, None);
        assert_eq!(filter.channel_type, None);
    }

    #[test]
    fn test_window_beyond_calendar_rejected() {
        let filter = ReportQuery::default().into_filter(NaiveDate::MIN, 30);
        assert!(matches!(filter, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_explicit_filters() {
        let client = Uuid::new_v4();
        let query = ReportQuery {
            client_id: Some(client.to_string()),
            channel_type: Some("Phygital".to_string()),
            ..Default::default()
        };

        let filter = query.into_filter(day(2024, 6, 30), 7).unwrap();
        assert_eq!(filter.client_id, Some(client));
        assert_eq!(filter.channel_type.as_deref(), Some("Phygital"));
        assert_eq!(filter.from, day(2024, 6, 23));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let reversed = ReportQuery {
            from: Some("2024-04-01".to_string()),
            to: Some("2024-03-01".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            reversed.into_filter(day(2024, 6, 30), 30),
            Err(AppError::InvalidInput(_))
        ));

        let bad_date = ReportQuery {
            from: Some("01/04/2024".to_string()),
            ..Default::default()
        };
        assert_err!(bad_date.into_filter(day(2024, 6, 30), 30));

        let signed_year = ReportQuery {
            to: Some("-262143-01-10".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            signed_year.into_filter(day(2024, 6, 30), 30),
            Err(AppError::InvalidInput(_))
        ));

        let bad_id = ReportQuery {
            broker_id: Some("not-a-uuid".to_string()),
            ..Default::default()
        };
        assert_err!(bad_id.into_filter(day(2024, 6, 30), 30));

        let bad_channel = ReportQuery {
            channel_type: Some("Offline".to_string()),
            ..Default::default()
        };
        assert_err!(bad_channel.into_filter(day(2024, 6, 30), 30));
    }
}
