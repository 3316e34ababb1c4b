//! Time utilities

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Today's date in UTC
pub fn today() -> NaiveDate {
    now_utc().date_naive()
}

/// Parse a `YYYY-MM-DD` date with a year between 1 and 9999
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .filter(|date| (1..=9999).contains(&date.year()))
}

/// The `days`-long window ending on `end`, both ends inclusive;
/// `None` when the start falls outside the calendar
pub fn window_ending(end: NaiveDate, days: i64) -> Option<(NaiveDate, NaiveDate)> {
    let from = end.checked_sub_signed(Duration::try_days(days)?)?;
    Some((from, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-31"),
            NaiveDate::from_ymd_opt(2024, 3, 31)
        );
        assert!(parse_date("31/03/2024").is_none());
        assert!(parse_date("2024-02-30").is_none());
        assert!(parse_date("-262143-01-10").is_none());
        assert!(parse_date("0000-01-01").is_none());
        assert!(parse_date("+10000-01-01").is_none());
    }

    #[test]
    fn test_window_ending() {
        let end = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let (from, to) = window_ending(end, 30).unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
        assert_eq!(to, end);
    }

    #[test]
    fn test_window_ending_out_of_range() {
        assert_eq!(window_ending(NaiveDate::MIN, 30), None);
        assert_eq!(window_ending(NaiveDate::MAX, i64::MAX), None);
    }
}
