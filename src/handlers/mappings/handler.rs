//! Client-product mapping handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{actions, modules},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::{ClientProductMap, ClientProductMapDetail},
    services::{MappingService, PermissionService},
    state::AppState,
};

use super::{request::MappingRequest, response::OptionsResponse};

/// List mappings with the names they reference
pub async fn list_mappings(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<ClientProductMapDetail>>> {
    PermissionService::require(&state, &auth_user, modules::CLIENT_PRODUCT_MAPPING, actions::VIEW)
        .await?;

    Ok(Json(MappingService::list_mappings(state.db()).await?))
}

pub async fn get_mapping(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ClientProductMap>> {
    PermissionService::require(&state, &auth_user, modules::CLIENT_PRODUCT_MAPPING, actions::VIEW)
        .await?;

    Ok(Json(MappingService::get_mapping(state.db(), &id).await?))
}

pub async fn create_mapping(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<MappingRequest>,
) -> AppResult<(StatusCode, Json<ClientProductMap>)> {
    PermissionService::require(&state, &auth_user, modules::CLIENT_PRODUCT_MAPPING, actions::EDIT)
        .await?;
    payload.validate()?;

    let mapping = MappingService::create_mapping(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(mapping)))
}

pub async fn update_mapping(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<MappingRequest>,
) -> AppResult<Json<ClientProductMap>> {
    PermissionService::require(&state, &auth_user, modules::CLIENT_PRODUCT_MAPPING, actions::EDIT)
        .await?;
    payload.validate()?;

    Ok(Json(MappingService::update_mapping(state.db(), &id, payload).await?))
}

pub async fn delete_mapping(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    PermissionService::require(
        &state,
        &auth_user,
        modules::CLIENT_PRODUCT_MAPPING,
        actions::DELETE,
    )
    .await?;

    MappingService::delete_mapping(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Picker options; any signed-in user may read them
pub async fn get_options(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
) -> AppResult<Json<OptionsResponse>> {
    Ok(Json(MappingService::options(state.db()).await?))
}
