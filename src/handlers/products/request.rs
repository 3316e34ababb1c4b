//! Product request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{constants::MAX_NAME_LENGTH, utils::validation::validate_not_blank};

/// Create or update product request
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = "validate_not_blank"))]
    pub category: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = "validate_not_blank"))]
    pub insurer_name: String,

    /// Default broker commission, percent of GWP
    #[validate(range(min = 0.0, max = 100.0))]
    pub base_commission_pct: f64,

    /// Default CDP fee, percent of GWP
    #[validate(range(min = 0.0, max = 100.0))]
    pub cdp_fee_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(base_commission_pct: f64, cdp_fee_pct: f64) -> ProductRequest {
        ProductRequest {
            name: "Group Health".to_string(),
            category: "Health".to_string(),
            insurer_name: "Star Health".to_string(),
            base_commission_pct,
            cdp_fee_pct,
        }
    }

    #[test]
    fn test_percentages_must_be_within_range() {
        assert!(request(7.5, 2.0).validate().is_ok());
        assert!(request(0.0, 100.0).validate().is_ok());
        assert!(request(-1.0, 2.0).validate().is_err());
        assert!(request(7.5, 120.0).validate().is_err());
    }
}
