//! Utility functions

pub mod crypto;
pub mod csv_export;
pub mod time;
pub mod validation;

pub use crypto::{generate_secure_token, hash_string};
pub use csv_export::to_csv;
pub use time::{now_utc, parse_date, today, window_ending};
pub use validation::{validate_channel_type, validate_date_range, validate_phone, validate_role_name};
