//! Domain types and pure stock logic for the inventory service.
//!
//! Nothing in this crate touches the database or HTTP; the persistence and
//! API crates build on these types.

pub mod error;
pub mod stock;
pub mod types;
