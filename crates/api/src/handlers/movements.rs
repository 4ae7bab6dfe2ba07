//! Handlers for the `/movements` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use inventory_db::models::movement::{CreateMovement, Movement};

use crate::error::AppResult;
use crate::services::MovementRecorder;
use crate::state::AppState;

/// GET /movements
///
/// Most recent first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movement>>> {
    let movements = MovementRecorder::list(&state.pool).await?;
    Ok(Json(movements))
}

/// POST /movements
///
/// Record an `entrada` or `saida` movement and apply it to the product.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovement>,
) -> AppResult<(StatusCode, Json<Movement>)> {
    let movement = MovementRecorder::record(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(movement)))
}
