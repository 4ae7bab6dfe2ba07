//! Repository for the append-only `movements` table.

use sqlx::{Executor, Sqlite};

use crate::models::movement::{Movement, NewMovement};

const COLUMNS: &str = "id, product_id, type, quantity, note, timestamp";

/// Read and append operations for stock movements. There is deliberately
/// no update or delete.
pub struct MovementRepo;

impl MovementRepo {
    /// List every movement, most recent first.
    ///
    /// Rows sharing a timestamp keep insertion order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Movement>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM movements ORDER BY timestamp DESC, id ASC");
        sqlx::query_as::<_, Movement>(&query).fetch_all(executor).await
    }

    /// Append a movement. The timestamp is assigned by the database.
    pub async fn insert<'e, E>(executor: E, input: &NewMovement) -> Result<Movement, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "INSERT INTO movements (product_id, type, quantity, note) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movement>(&query)
            .bind(input.product_id)
            .bind(input.movement_type.as_str())
            .bind(input.quantity)
            .bind(&input.note)
            .fetch_one(executor)
            .await
    }
}
