//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// SESSION DEFAULTS
// =============================================================================

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE_NAME: &str = "session_token";

/// Default session lifetime in hours
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Length of the random session token handed to clients
pub const SESSION_TOKEN_LENGTH: usize = 48;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 64;

// =============================================================================
// REPORTING DEFAULTS
// =============================================================================

/// INR per USD used when no exchange rate has been recorded
pub const DEFAULT_EXCHANGE_RATE: f64 = 83.5;

/// Default report window, ending today
pub const DEFAULT_REPORT_RANGE_DAYS: i64 = 30;

/// Filter value meaning "do not filter on this column"
pub const FILTER_ALL: &str = "all";

// =============================================================================
// USER ROLES
// =============================================================================

/// Built-in role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const VIEWER: &str = "viewer";
    pub const DATA_ENTRY: &str = "dataentry";

    /// All built-in roles
    pub const ALL: &[&str] = &[ADMIN, VIEWER, DATA_ENTRY];
}

// =============================================================================
// PERMISSIONS
// =============================================================================

/// Functional areas that permissions are granted on
pub mod modules {
    pub const DASHBOARD: &str = "dashboard";
    pub const CLIENTS: &str = "clients";
    pub const PRODUCTS: &str = "products";
    pub const BROKERS: &str = "brokers";
    pub const SALES_LEADS: &str = "sales_leads";
    pub const CLIENT_PRODUCT_MAPPING: &str = "client_product_mapping";
    pub const SALES_UPLOAD: &str = "sales_upload";
    pub const COMMISSION_REPORT: &str = "commission_report";
    pub const USER_MANAGEMENT: &str = "user_management";

    /// Seeded modules with their descriptions
    pub const SEED: &[(&str, &str)] = &[
        (DASHBOARD, "Dashboard and analytics"),
        (CLIENTS, "Client management"),
        (PRODUCTS, "Product management"),
        (BROKERS, "Broker management"),
        (SALES_LEADS, "Sales leads management"),
        (CLIENT_PRODUCT_MAPPING, "Client-product mapping"),
        (SALES_UPLOAD, "Sales data upload"),
        (COMMISSION_REPORT, "Commission reports"),
        (USER_MANAGEMENT, "User and permission management"),
    ];

    /// All module names
    pub const ALL: &[&str] = &[
        DASHBOARD,
        CLIENTS,
        PRODUCTS,
        BROKERS,
        SALES_LEADS,
        CLIENT_PRODUCT_MAPPING,
        SALES_UPLOAD,
        COMMISSION_REPORT,
        USER_MANAGEMENT,
    ];
}

/// Actions a permission grants on a module
pub mod actions {
    pub const VIEW: &str = "view";
    pub const EDIT: &str = "edit";
    pub const DELETE: &str = "delete";

    /// All actions
    pub const ALL: &[&str] = &[VIEW, EDIT, DELETE];
}

// =============================================================================
// SALES
// =============================================================================

/// Sales channel classifications
pub mod channels {
    pub const ONLINE: &str = "Online";
    pub const PHYGITAL: &str = "Phygital";

    /// All channel types
    pub const ALL: &[&str] = &[ONLINE, PHYGITAL];
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Login endpoint - max requests
    pub const AUTH_MAX_REQUESTS: i64 = 10;
    /// Login endpoint - window in seconds
    pub const AUTH_WINDOW_SECS: i64 = 60;
    /// Longest a login waits on Redis before the limiter is skipped
    pub const REDIS_TIMEOUT_MS: u64 = 500;
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum length of entity names (clients, products, brokers, ...)
pub const MAX_NAME_LENGTH: u64 = 255;
