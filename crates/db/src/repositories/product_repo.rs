//! Repository for the `products` table.

use inventory_core::types::DbId;
use sqlx::{Executor, Sqlite};

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, quantity, min_quantity";

/// Provides CRUD and stock-level operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List all products in id order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Product>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(executor).await
    }

    /// Find a product by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Product>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = ?1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Insert a new product, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateProduct) -> Result<Product, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "INSERT INTO products (name, description, price, quantity, min_quantity) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.quantity)
            .bind(input.min_quantity)
            .fetch_one(executor)
            .await
    }

    /// Update a product. Only supplied fields are applied; a supplied `null`
    /// description clears it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "UPDATE products SET \
                name = COALESCE(?2, name), \
                description = CASE WHEN ?3 THEN ?4 ELSE description END, \
                price = COALESCE(?5, price), \
                quantity = COALESCE(?6, quantity), \
                min_quantity = COALESCE(?7, min_quantity) \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(Option::as_deref))
            .bind(input.price)
            .bind(input.quantity)
            .bind(input.min_quantity)
            .fetch_optional(executor)
            .await
    }

    /// Add `delta` to the stored quantity, but only if the result stays
    /// non-negative.
    ///
    /// Returns `None` when the product is missing or the guard rejects the
    /// change; the row is left untouched in both cases.
    pub async fn adjust_quantity<'e, E>(
        executor: E,
        id: DbId,
        delta: i64,
    ) -> Result<Option<Product>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "UPDATE products SET quantity = quantity + ?2 \
             WHERE id = ?1 AND quantity + ?2 >= 0 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(executor)
            .await
    }

    /// Permanently delete a product. Returns `true` if a row was removed.
    ///
    /// Movements referencing the product are kept.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
