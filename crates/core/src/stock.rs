//! Stock movement types and the quantity transition rules.
//!
//! A product's quantity only evolves through [`apply_movement`]; the
//! persistence layer re-checks the same guard inside the write so a stale
//! read can never drive a quantity below zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Note attached to the inbound movement emitted when a product is
/// registered with a positive starting quantity.
pub const INITIAL_REGISTRATION_NOTE: &str = "Cadastro inicial do produto";

/// Message returned when any product numeric field is negative.
pub const NEGATIVE_VALUES_MESSAGE: &str = "Negative values are not allowed";

/// Message returned when a product name is supplied empty.
pub const EMPTY_NAME_MESSAGE: &str = "Name must not be empty";

pub const NON_POSITIVE_QUANTITY_MESSAGE: &str = "Quantity must be greater than zero";

pub const INVALID_TYPE_MESSAGE: &str = "Type must be 'entrada' or 'saida'";

pub const INSUFFICIENT_STOCK_MESSAGE: &str = "Cannot remove more than current quantity";

// ---------------------------------------------------------------------------
// Movement type
// ---------------------------------------------------------------------------

/// Kind of stock movement.
///
/// Serialized with the external tokens `entrada`, `saida` and `excluido`,
/// both on the wire and in the `movements.type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementType {
    #[serde(rename = "entrada")]
    Inbound,
    #[serde(rename = "saida")]
    Outbound,
    /// Synthetic terminal record written when a product is deleted.
    #[serde(rename = "excluido")]
    Deleted,
}

impl MovementType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inbound => "entrada",
            Self::Outbound => "saida",
            Self::Deleted => "excluido",
        }
    }

    /// Parse a caller-supplied type. Only `entrada` and `saida` are
    /// accepted; `excluido` is reserved for the system.
    pub fn parse_requested(token: &str) -> Result<Self, CoreError> {
        match token {
            "entrada" => Ok(Self::Inbound),
            "saida" => Ok(Self::Outbound),
            _ => Err(CoreError::Validation(INVALID_TYPE_MESSAGE.to_string())),
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes the stored column value, including the system-only `excluido`.
impl TryFrom<String> for MovementType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "excluido" => Ok(Self::Deleted),
            other => Self::parse_requested(other)
                .map_err(|_| CoreError::Validation(format!("unknown movement type '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Transition rules
// ---------------------------------------------------------------------------

/// Reject a user-initiated movement amount that is zero or negative.
pub fn validate_movement_quantity(quantity: i64) -> Result<(), CoreError> {
    if quantity <= 0 {
        return Err(CoreError::Validation(
            NON_POSITIVE_QUANTITY_MESSAGE.to_string(),
        ));
    }
    Ok(())
}

/// Signed change a movement applies to the stored quantity.
///
/// `Deleted` records a snapshot and does not change the quantity itself.
pub fn signed_delta(kind: MovementType, amount: i64) -> i64 {
    match kind {
        MovementType::Inbound => amount,
        MovementType::Outbound => -amount,
        MovementType::Deleted => 0,
    }
}

/// Compute the quantity after applying a movement.
///
/// Fails without side effects when the result would be negative.
pub fn apply_movement(current: i64, kind: MovementType, amount: i64) -> Result<i64, CoreError> {
    let next = current
        .checked_add(signed_delta(kind, amount))
        .ok_or_else(|| CoreError::Validation(format!("Quantity overflow applying {amount}")))?;
    if next < 0 {
        return Err(CoreError::Validation(
            INSUFFICIENT_STOCK_MESSAGE.to_string(),
        ));
    }
    Ok(next)
}
