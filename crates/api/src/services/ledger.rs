//! Product catalog operations.

use inventory_core::error::CoreError;
use inventory_core::types::DbId;
use inventory_db::models::movement::NewMovement;
use inventory_db::models::product::{CreateProduct, Product, UpdateProduct};
use inventory_db::repositories::ProductRepo;
use inventory_db::DbPool;

use super::{validate_product_input, MovementRecorder};
use crate::error::AppResult;

/// Create, read, update and delete products, emitting the movements that
/// registration and deletion imply.
pub struct ProductLedger;

impl ProductLedger {
    /// All products, in id order.
    pub async fn list(pool: &DbPool) -> AppResult<Vec<Product>> {
        Ok(ProductRepo::list(pool).await?)
    }

    pub async fn get(pool: &DbPool, id: DbId) -> AppResult<Product> {
        let product = ProductRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::product_not_found(id))?;
        Ok(product)
    }

    /// Register a product. A positive starting quantity is recorded as one
    /// inbound movement in the same transaction.
    pub async fn create(pool: &DbPool, input: &CreateProduct) -> AppResult<Product> {
        validate_product_input(input)?;

        let mut tx = inventory_db::begin_write(pool).await?;
        let product = ProductRepo::create(&mut *tx, input).await?;
        if product.quantity > 0 {
            MovementRecorder::record_system(&mut tx, &NewMovement::initial_registration(&product))
                .await?;
        }
        tx.commit().await?;

        tracing::info!(
            product_id = product.id,
            quantity = product.quantity,
            "Product registered"
        );
        Ok(product)
    }

    /// Apply a partial update.
    ///
    /// A supplied `quantity` overwrites the stored value without recording
    /// a movement, so the movement history no longer sums to the stored
    /// quantity afterwards. Kept for compatibility with existing clients;
    /// stock changes should go through [`MovementRecorder::record`].
    pub async fn update(pool: &DbPool, id: DbId, input: &UpdateProduct) -> AppResult<Product> {
        let mut tx = inventory_db::begin_write(pool).await?;
        let current = ProductRepo::find_by_id(&mut *tx, id)
            .await?
            .ok_or(CoreError::product_not_found(id))?;
        validate_product_input(input)?;

        let updated = ProductRepo::update(&mut *tx, id, input)
            .await?
            .ok_or(CoreError::product_not_found(id))?;
        tx.commit().await?;

        if updated.quantity != current.quantity {
            tracing::warn!(
                product_id = id,
                from = current.quantity,
                to = updated.quantity,
                "Quantity overwritten by update; no movement recorded"
            );
        }
        Ok(updated)
    }

    /// Delete a product, first appending a terminal `excluido` movement that
    /// snapshots its quantity. Earlier movements are kept.
    pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<()> {
        let mut tx = inventory_db::begin_write(pool).await?;
        let product = ProductRepo::find_by_id(&mut *tx, id)
            .await?
            .ok_or(CoreError::product_not_found(id))?;

        MovementRecorder::record_system(&mut tx, &NewMovement::deletion_snapshot(&product)).await?;
        ProductRepo::delete(&mut *tx, id).await?;
        tx.commit().await?;

        tracing::info!(
            product_id = id,
            final_quantity = product.quantity,
            "Product deleted"
        );
        Ok(())
    }
}
