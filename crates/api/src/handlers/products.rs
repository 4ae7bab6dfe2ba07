//! Handlers for the `/products` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use inventory_core::types::DbId;
use inventory_db::models::product::{CreateProduct, Product, UpdateProduct};

use crate::error::AppResult;
use crate::services::ProductLedger;
use crate::state::AppState;

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = ProductLedger::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductLedger::list(&state.pool).await?;
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductLedger::get(&state.pool, id).await?;
    Ok(Json(product))
}

/// PUT /products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let product = ProductLedger::update(&state.pool, id, &input).await?;
    Ok(Json(product))
}

/// DELETE /products/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    ProductLedger::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
