//! Exchange rate request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// Record an INR per USD rate; the date defaults to today
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExchangeRateRequest {
    #[validate(range(exclusive_min = 0.0))]
    pub rate: f64,

    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use tokio_test::{assert_err, assert_ok};

    use super::*;

    #[test]
    fn test_rate_must_be_positive() {
        let valid = CreateExchangeRateRequest {
            rate: 83.12,
            date: None,
        };
        assert_ok!(valid.validate());

        let zero = CreateExchangeRateRequest {
            rate: 0.0,
            date: None,
        };
        assert_err!(zero.validate());
    }
}
