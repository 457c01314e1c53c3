//! Product endpoints
//!
//! Each handler makes one store call. An absent result on the by-id routes
//! becomes `ApiError::NotFound`; everything else passes through unchanged.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::ProductIdPath;
use crate::http::server::AppState;
use crate::models::{NewProduct, Product, ProductPatch};

/// POST /products - create a product
async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state.store.create_product(req).await?;
    tracing::info!(id = %product.id, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products - list every product
async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.store.get_products().await?))
}

/// GET /products/{id} - get a single product
async fn get_product(
    State(state): State<Arc<AppState>>,
    ProductIdPath(id): ProductIdPath,
) -> Result<Json<Product>, ApiError> {
    let product = state.store.get_product(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(product))
}

/// DELETE /products/{id} - delete a product, returning its last state
async fn delete_product(
    State(state): State<Arc<AppState>>,
    ProductIdPath(id): ProductIdPath,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .store
        .delete_product(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(%id, "product deleted");

    Ok(Json(product))
}

/// PUT /products/{id} - overwrite the fields present in the body
async fn update_product(
    State(state): State<Arc<AppState>>,
    ProductIdPath(id): ProductIdPath,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .store
        .update_product(id, patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(%id, "product updated");

    Ok(Json(product))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
