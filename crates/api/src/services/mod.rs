//! Invariant-preserving stock operations.
//!
//! [`ProductLedger`] owns the product catalog; [`MovementRecorder`] owns the
//! movement history and is the only code path that changes a product's
//! quantity through a movement. Every mutating call runs in one database
//! transaction opened from the pool it is given: the product row and its
//! movement row are committed together or not at all.

pub mod ledger;
pub mod recorder;

pub use ledger::ProductLedger;
pub use recorder::MovementRecorder;

use inventory_core::error::CoreError;
use inventory_core::stock::{EMPTY_NAME_MESSAGE, NEGATIVE_VALUES_MESSAGE};
use validator::Validate;

const NUMERIC_FIELDS: [&str; 3] = ["price", "quantity", "min_quantity"];

/// Run the DTO's `validator` rules, reporting failures as
/// [`CoreError::Validation`]. Negative numbers take precedence over an
/// empty name.
fn validate_product_input(input: &impl Validate) -> Result<(), CoreError> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };
    let fields = errors.field_errors();

    let message = if NUMERIC_FIELDS.iter().any(|field| fields.contains_key(*field)) {
        NEGATIVE_VALUES_MESSAGE.to_string()
    } else if fields.contains_key("name") {
        EMPTY_NAME_MESSAGE.to_string()
    } else {
        errors.to_string()
    };
    Err(CoreError::Validation(message))
}
