//! Input validation utilities

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::ValidationError;

use crate::constants;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9(][0-9 ()\-]{5,30}$").expect("valid phone regex"));

static ROLE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]{1,63}$").expect("valid role name regex"));

/// Reject text that is empty once surrounding whitespace is trimmed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank").with_message("must not be blank".into()))
    } else {
        Ok(())
    }
}

/// Validate a sales channel (`Online` or `Phygital`)
pub fn validate_channel_type(channel: &str) -> Result<(), &'static str> {
    if constants::channels::ALL.contains(&channel) {
        Ok(())
    } else {
        Err("Channel type must be Online or Phygital")
    }
}

/// Validate a role name: lowercase letters, digits and underscores
pub fn validate_role_name(name: &str) -> Result<(), &'static str> {
    if ROLE_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err("Role name must be 2-64 lowercase letters, digits or underscores, starting with a letter")
    }
}

/// Validate a phone number (digits with optional `+`, spaces, dashes, parentheses)
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if PHONE_RE.is_match(phone.trim()) {
        Ok(())
    } else {
        Err("Invalid phone number")
    }
}

/// Validate a percentage in `0..=100`
pub fn validate_percentage(value: f64) -> Result<(), &'static str> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err("Percentage must be between 0 and 100")
    }
}

/// Validate a non-negative money amount
pub fn validate_amount(value: f64) -> Result<(), &'static str> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err("Amount must be a non-negative number")
    }
}

/// Validate that a date range is ordered
pub fn validate_date_range(from: NaiveDate, to: NaiveDate) -> Result<(), &'static str> {
    if from <= to {
        Ok(())
    } else {
        Err("Start date must not be after end date")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Acme").is_ok());
        assert!(validate_not_blank(" a ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank(" \t ").is_err());
    }

    #[test]
    fn test_validate_channel_type() {
        assert!(validate_channel_type("Online").is_ok());
        assert!(validate_channel_type("Phygital").is_ok());
        assert!(validate_channel_type("online").is_err());
        assert!(validate_channel_type("Branch").is_err());
    }

    #[test]
    fn test_validate_role_name() {
        assert!(validate_role_name("auditor").is_ok());
        assert!(validate_role_name("regional_manager2").is_ok());
        assert!(validate_role_name("Auditor").is_err());
        assert!(validate_role_name("2fast").is_err());
        assert!(validate_role_name("a").is_err());
        assert!(validate_role_name("").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+91 98765 43210").is_ok());
        assert!(validate_phone("(022) 555-0199").is_ok());
        assert!(validate_phone("022-5550199").is_ok());
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("12").is_err());
    }

    #[test]
    fn test_validate_percentage_and_amount() {
        assert!(validate_percentage(0.0).is_ok());
        assert!(validate_percentage(12.5).is_ok());
        assert!(validate_percentage(100.0).is_ok());
        assert!(validate_percentage(-0.1).is_err());
        assert!(validate_percentage(f64::NAN).is_err());
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(-1.0).is_err());
    }

    #[test]
    fn test_validate_date_range() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert!(validate_date_range(a, b).is_ok());
        assert!(validate_date_range(a, a).is_ok());
        assert!(validate_date_range(b, a).is_err());
    }
}
