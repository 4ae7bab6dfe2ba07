//! Product entity model and DTOs.

use inventory_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
    /// Advisory reorder threshold. Never enforced.
    pub min_quantity: i64,
}

/// DTO for registering a new product. Only `name` is required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub quantity: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub min_quantity: i64,
}

/// DTO for updating an existing product. All fields optional; omitted
/// fields keep their stored value.
///
/// `description` is the only nullable column: `Some(None)` (an explicit
/// `null`) clears it. An explicit `null` for any other field is refused at
/// deserialization. `quantity` is written directly, without a stock
/// movement.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProduct {
    #[serde(default, deserialize_with = "supplied")]
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "supplied")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "supplied")]
    #[validate(range(min = 0))]
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "supplied")]
    #[validate(range(min = 0))]
    pub min_quantity: Option<i64>,
}

/// Deserialize a field that is present in the payload as `Some`.
///
/// Combined with `#[serde(default)]`, an absent field stays `None`. For a
/// nullable `T` such as `Option<String>`, `null` becomes `Some(None)`; for a
/// non-nullable `T`, `null` is an error.
fn supplied<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
