//! Route definitions for the `/movements` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movements;
use crate::state::AppState;

/// Movement routes mounted at `/movements`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(movements::list).post(movements::create))
}
