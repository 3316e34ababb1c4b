//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod broker;
pub mod client;
pub mod exchange_rate;
pub mod mapping;
pub mod permission;
pub mod product;
pub mod report;
pub mod role;
pub mod sales;
pub mod sales_lead;
pub mod session;
pub mod user;

pub use broker::*;
pub use client::*;
pub use exchange_rate::*;
pub use mapping::*;
pub use permission::*;
pub use product::*;
pub use report::*;
pub use role::*;
pub use sales::*;
pub use sales_lead::*;
pub use session::*;
pub use user::*;
