//! Client-product mapping service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{
        BrokerRepository, ClientRepository, MappingRepository, ProductRepository,
        SalesLeadRepository,
    },
    error::{AppError, AppResult},
    handlers::mappings::{request::MappingRequest, response::OptionsResponse},
    models::{ClientProductMap, ClientProductMapDetail},
    utils::validate_channel_type,
};

/// Mapping service for business logic
pub struct MappingService;

impl MappingService {
    /// Mappings with display names, ordered by client
    pub async fn list_mappings(pool: &PgPool) -> AppResult<Vec<ClientProductMapDetail>> {
        MappingRepository::list_detailed(pool).await
    }

    pub async fn get_mapping(pool: &PgPool, id: &Uuid) -> AppResult<ClientProductMap> {
        MappingRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mapping not found".to_string()))
    }

    pub async fn create_mapping(
        pool: &PgPool,
        payload: MappingRequest,
    ) -> AppResult<ClientProductMap> {
        validate_channel_type(&payload.channel_type)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        MappingRepository::create(
            pool,
            &payload.client_id,
            &payload.product_id,
            &payload.broker_id,
            &payload.sales_lead_id,
            &payload.channel_type,
            payload.start_date,
        )
        .await
    }

    pub async fn update_mapping(
        pool: &PgPool,
        id: &Uuid,
        payload: MappingRequest,
    ) -> AppResult<ClientProductMap> {
        validate_channel_type(&payload.channel_type)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        MappingRepository::update(
            pool,
            id,
            &payload.client_id,
            &payload.product_id,
            &payload.broker_id,
            &payload.sales_lead_id,
            &payload.channel_type,
            payload.start_date,
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Mapping not found".to_string()))
    }

    pub async fn delete_mapping(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !MappingRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Mapping not found".to_string()));
        }
        Ok(())
    }

    /// Id/name lists for the mapping and sales pickers
    pub async fn options(pool: &PgPool) -> AppResult<OptionsResponse> {
        let (clients, products, brokers, sales_leads) = futures::try_join!(
            ClientRepository::options(pool),
            ProductRepository::options(pool),
            BrokerRepository::options(pool),
            SalesLeadRepository::options(pool),
        )?;

        Ok(OptionsResponse {
            clients,
            products,
            brokers,
            sales_leads,
        })
    }
}
