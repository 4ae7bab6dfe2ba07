//! Stock movement recording.

use inventory_core::error::CoreError;
use inventory_core::stock::{self, MovementType, INSUFFICIENT_STOCK_MESSAGE};
use inventory_db::models::movement::{CreateMovement, Movement, NewMovement};
use inventory_db::repositories::{MovementRepo, ProductRepo};
use inventory_db::DbPool;
use sqlx::SqliteConnection;

use crate::error::AppResult;

/// Appends movements and applies them to product quantities.
pub struct MovementRecorder;

impl MovementRecorder {
    /// All movements, most recent first.
    pub async fn list(pool: &DbPool) -> AppResult<Vec<Movement>> {
        Ok(MovementRepo::list(pool).await?)
    }

    /// Record a caller-requested inbound or outbound movement.
    ///
    /// Checks run in order: product exists, quantity positive, type valid,
    /// enough stock for an outbound. The quantity change and the movement
    /// row are committed together.
    pub async fn record(pool: &DbPool, input: &CreateMovement) -> AppResult<Movement> {
        let mut tx = inventory_db::begin_write(pool).await?;

        let product = ProductRepo::find_by_id(&mut *tx, input.product_id)
            .await?
            .ok_or(CoreError::product_not_found(input.product_id))?;
        stock::validate_movement_quantity(input.quantity)?;
        let kind = MovementType::parse_requested(&input.movement_type)?;
        stock::apply_movement(product.quantity, kind, input.quantity)?;

        // The write lock is held from the read onwards; the guard in the
        // UPDATE still keeps the row non-negative if that ever changes.
        let updated = ProductRepo::adjust_quantity(
            &mut *tx,
            product.id,
            stock::signed_delta(kind, input.quantity),
        )
        .await?
        .ok_or_else(|| CoreError::Validation(INSUFFICIENT_STOCK_MESSAGE.to_string()))?;

        let movement = Self::record_system(
            &mut tx,
            &NewMovement {
                product_id: product.id,
                movement_type: kind,
                quantity: input.quantity,
                note: input.note.clone(),
            },
        )
        .await?;
        tx.commit().await?;

        tracing::info!(
            movement_id = movement.id,
            product_id = product.id,
            kind = %kind,
            quantity = input.quantity,
            new_quantity = updated.quantity,
            "Stock movement recorded"
        );
        Ok(movement)
    }

    /// Append a movement built by the system from already-validated data
    /// (initial registration, deletion snapshot).
    ///
    /// Runs on the caller's connection so it joins the caller's transaction.
    /// Does not touch the product row.
    pub async fn record_system(
        conn: &mut SqliteConnection,
        movement: &NewMovement,
    ) -> Result<Movement, sqlx::Error> {
        let recorded = MovementRepo::insert(&mut *conn, movement).await?;
        tracing::debug!(
            movement_id = recorded.id,
            product_id = recorded.product_id,
            kind = %recorded.movement_type,
            quantity = recorded.quantity,
            "System movement recorded"
        );
        Ok(recorded)
    }
}
