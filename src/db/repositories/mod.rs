//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod broker_repo;
pub mod client_repo;
pub mod exchange_rate_repo;
pub mod mapping_repo;
pub mod permission_repo;
pub mod product_repo;
pub mod report_repo;
pub mod role_repo;
pub mod sales_lead_repo;
pub mod sales_repo;
pub mod session_repo;
pub mod user_repo;

pub use broker_repo::BrokerRepository;
pub use client_repo::ClientRepository;
pub use exchange_rate_repo::ExchangeRateRepository;
pub use mapping_repo::MappingRepository;
pub use permission_repo::PermissionRepository;
pub use product_repo::ProductRepository;
pub use report_repo::ReportRepository;
pub use role_repo::RoleRepository;
pub use sales_lead_repo::SalesLeadRepository;
pub use sales_repo::SalesRepository;
pub use session_repo::SessionRepository;
pub use user_repo::UserRepository;
