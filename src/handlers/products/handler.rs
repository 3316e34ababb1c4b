//! Product handler implementations

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
    models::Product,
    services::{PermissionService, ProductService},
    state::AppState,
};

use super::request::ProductRequest;

/// List products ordered by name
pub async fn list_products(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<Product>>> {
    PermissionService::require(&state, &auth_user, modules::PRODUCTS, actions::VIEW).await?;

    Ok(Json(ProductService::list_products(state.db()).await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Product>> {
    PermissionService::require(&state, &auth_user, modules::PRODUCTS, actions::VIEW).await?;

    Ok(Json(ProductService::get_product(state.db(), &id).await?))
}

pub async fn create_product(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<ProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    PermissionService::require(&state, &auth_user, modules::PRODUCTS, actions::EDIT).await?;
    payload.validate()?;

    let created = ProductService::create_product(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductRequest>,
) -> AppResult<Json<Product>> {
    PermissionService::require(&state, &auth_user, modules::PRODUCTS, actions::EDIT).await?;
    payload.validate()?;

    Ok(Json(ProductService::update_product(state.db(), &id, payload).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    PermissionService::require(&state, &auth_user, modules::PRODUCTS, actions::DELETE).await?;

    ProductService::delete_product(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
