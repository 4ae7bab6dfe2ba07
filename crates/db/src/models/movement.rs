//! Stock movement entity model and DTOs.

use inventory_core::stock::{MovementType, INITIAL_REGISTRATION_NOTE};
use inventory_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::product::Product;

/// A row from the `movements` table. Rows are never updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movement {
    pub id: DbId,
    /// Weak reference: the product may no longer exist.
    pub product_id: DbId,
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub quantity: i64,
    pub note: Option<String>,
    pub timestamp: Timestamp,
}

/// Caller input for `POST /movements`.
///
/// The type stays a raw string so an unknown token is reported as a
/// validation failure rather than a body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovement {
    pub product_id: DbId,
    #[serde(rename = "type")]
    pub movement_type: String,
    pub quantity: i64,
    pub note: Option<String>,
}

/// A movement row ready to insert. Built only from already-validated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovement {
    pub product_id: DbId,
    pub movement_type: MovementType,
    pub quantity: i64,
    pub note: Option<String>,
}

impl NewMovement {
    /// Inbound movement recording a product's starting stock.
    pub fn initial_registration(product: &Product) -> Self {
        Self {
            product_id: product.id,
            movement_type: MovementType::Inbound,
            quantity: product.quantity,
            note: Some(INITIAL_REGISTRATION_NOTE.to_string()),
        }
    }

    /// Terminal snapshot written as a product is deleted: its quantity at
    /// that moment, noted with the product name.
    pub fn deletion_snapshot(product: &Product) -> Self {
        Self {
            product_id: product.id,
            movement_type: MovementType::Deleted,
            quantity: product.quantity,
            note: Some(product.name.clone()),
        }
    }
}
