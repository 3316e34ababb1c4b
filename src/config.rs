//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_EXCHANGE_RATE, DEFAULT_REPORT_RANGE_DAYS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SESSION_TTL_HOURS,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub session: SessionConfig,
    pub bootstrap: BootstrapConfig,
    pub reporting: ReportingConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Emit logs as JSON lines instead of the human formatter
    pub log_json: bool,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// Session cookie configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub ttl_hours: i64,
    /// Add the `Secure` attribute to the session cookie
    pub secure_cookie: bool,
}

/// First-run admin account
#[derive(Debug, Clone, Default)]
pub struct BootstrapConfig {
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

/// Reporting defaults
#[derive(Debug, Clone)]
pub struct ReportingConfig {
    /// INR per USD used when no rate is stored
    pub default_exchange_rate: f64,
    /// Length of the report window when no dates are given
    pub default_range_days: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            redis: RedisConfig::from_env()?,
            session: SessionConfig::from_env()?,
            bootstrap: BootstrapConfig::from_env(),
            reporting: ReportingConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_json: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }
}

impl SessionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let ttl_hours: i64 = env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_HOURS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SESSION_TTL_HOURS".to_string()))?;

        if ttl_hours <= 0 {
            return Err(ConfigError::InvalidValue("SESSION_TTL_HOURS".to_string()));
        }

        Ok(Self {
            ttl_hours,
            secure_cookie: parse_bool("SESSION_COOKIE_SECURE")?.unwrap_or(false),
        })
    }

    /// Session lifetime in seconds, as used for the cookie `Max-Age`
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_hours * 3600
    }
}

impl BootstrapConfig {
    fn from_env() -> Self {
        Self {
            admin_email: env::var("ADMIN_EMAIL").ok().filter(|v| !v.is_empty()),
            admin_password: env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty()),
        }
    }
}

impl ReportingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let default_exchange_rate: f64 = env::var("DEFAULT_EXCHANGE_RATE")
            .unwrap_or_else(|_| DEFAULT_EXCHANGE_RATE.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DEFAULT_EXCHANGE_RATE".to_string()))?;

        if default_exchange_rate <= 0.0 {
            return Err(ConfigError::InvalidValue("DEFAULT_EXCHANGE_RATE".to_string()));
        }

        Ok(Self {
            default_exchange_rate,
            default_range_days: parse_range_days(
                &env::var("DEFAULT_REPORT_RANGE_DAYS")
                    .unwrap_or_else(|_| DEFAULT_REPORT_RANGE_DAYS.to_string()),
            )?,
        })
    }
}

/// Report window length; must be a positive number of days
fn parse_range_days(value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|days| *days > 0)
        .ok_or_else(|| ConfigError::InvalidValue("DEFAULT_REPORT_RANGE_DAYS".to_string()))
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            default_exchange_rate: DEFAULT_EXCHANGE_RATE,
            default_range_days: DEFAULT_REPORT_RANGE_DAYS,
        }
    }
}

/// Parse an optional boolean flag ("true"/"false"/"1"/"0")
fn parse_bool(name: &str) -> Result<Option<bool>, ConfigError> {
    match env::var(name) {
        Ok(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(Some(true)),
            "0" | "false" | "no" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidValue(name.to_string())),
        },
        Err(_) => Ok(None),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
            log_json: false,
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_session_ttl_seconds() {
        let session = SessionConfig {
            ttl_hours: 24,
            secure_cookie: false,
        };
        assert_eq!(session.ttl_seconds(), 86_400);
    }

    #[test]
    fn test_reporting_defaults() {
        let reporting = ReportingConfig::default();
        assert_eq!(reporting.default_exchange_rate, 83.5);
        assert_eq!(reporting.default_range_days, 30);
    }

    #[test]
    fn test_report_range_must_be_positive() {
        assert_eq!(parse_range_days("30").unwrap(), 30);
        assert_eq!(parse_range_days(" 7 ").unwrap(), 7);
        assert!(matches!(parse_range_days("0"), Err(ConfigError::InvalidValue(_))));
        assert!(parse_range_days("-5").is_err());
        assert!(parse_range_days("week").is_err());
    }
}
