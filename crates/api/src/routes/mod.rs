pub mod health;
pub mod movements;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// ```text
/// /products              list, create
/// /products/{id}         get, update, delete
/// /movements             list (most recent first), create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/movements", movements::router())
}
