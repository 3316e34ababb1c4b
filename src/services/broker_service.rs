//! Broker service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::BrokerRepository,
    error::{AppError, AppResult},
    handlers::brokers::request::BrokerRequest,
    models::Broker,
};

/// Broker service for business logic
pub struct BrokerService;

impl BrokerService {
    pub async fn list_brokers(pool: &PgPool) -> AppResult<Vec<Broker>> {
        BrokerRepository::list(pool).await
    }

    pub async fn get_broker(pool: &PgPool, id: &Uuid) -> AppResult<Broker> {
        BrokerRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Broker not found".to_string()))
    }

    pub async fn create_broker(pool: &PgPool, payload: BrokerRequest) -> AppResult<Broker> {
        BrokerRepository::create(
            pool,
            payload.name.trim(),
            payload.contact_email.trim(),
            payload.partner_type.trim(),
        )
        .await
    }

    pub async fn update_broker(
        pool: &PgPool,
        id: &Uuid,
        payload: BrokerRequest,
    ) -> AppResult<Broker> {
        BrokerRepository::update(
            pool,
            id,
            payload.name.trim(),
            payload.contact_email.trim(),
            payload.partner_type.trim(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Broker not found".to_string()))
    }

    pub async fn delete_broker(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !BrokerRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Broker not found".to_string()));
        }
        Ok(())
    }
}
