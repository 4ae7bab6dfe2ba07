use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for the "product does not exist" case, raised by every
    /// operation that takes a product id.
    pub fn product_not_found(id: DbId) -> Self {
        Self::NotFound {
            entity: "Product",
            id,
        }
    }
}
