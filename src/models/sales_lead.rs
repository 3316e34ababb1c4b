//! Sales lead model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Internal salesperson responsible for a client relationship
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SalesLead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
}
