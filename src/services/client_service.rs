//! Client service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::ClientRepository,
    error::{AppError, AppResult},
    handlers::clients::request::ClientRequest,
    models::Client,
};

/// Client service for business logic
pub struct ClientService;

impl ClientService {
    pub async fn list_clients(pool: &PgPool) -> AppResult<Vec<Client>> {
        ClientRepository::list(pool).await
    }

    pub async fn get_client(pool: &PgPool, id: &Uuid) -> AppResult<Client> {
        ClientRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Client not found".to_string()))
    }

    pub async fn create_client(pool: &PgPool, payload: ClientRequest) -> AppResult<Client> {
        ClientRepository::create(
            pool,
            payload.name.trim(),
            payload.industry.trim(),
            payload.region.trim(),
        )
        .await
    }

    pub async fn update_client(
        pool: &PgPool,
        id: &Uuid,
        payload: ClientRequest,
    ) -> AppResult<Client> {
        ClientRepository::update(
            pool,
            id,
            payload.name.trim(),
            payload.industry.trim(),
            payload.region.trim(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Client not found".to_string()))
    }

    /// Delete a client; clients referenced by mappings or sales are kept (409)
    pub async fn delete_client(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !ClientRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Client not found".to_string()));
        }
        Ok(())
    }
}
