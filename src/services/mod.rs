//! Business logic services

pub mod auth_service;
pub mod broker_service;
pub mod client_service;
pub mod exchange_rate_service;
pub mod mapping_service;
pub mod permission_service;
pub mod product_service;
pub mod report_service;
pub mod role_service;
pub mod sales_lead_service;
pub mod sales_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use broker_service::BrokerService;
pub use client_service::ClientService;
pub use exchange_rate_service::ExchangeRateService;
pub use mapping_service::MappingService;
pub use permission_service::{PermissionService, PermissionStore, PgPermissionStore};
pub use product_service::ProductService;
pub use report_service::ReportService;
pub use role_service::RoleService;
pub use sales_lead_service::SalesLeadService;
pub use sales_service::SalesService;
pub use user_service::UserService;
