//! Broker model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Distribution partner earning commission on sales
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Broker {
    pub id: Uuid,
    pub name: String,
    pub contact_email: String,
    pub partner_type: String,
}
