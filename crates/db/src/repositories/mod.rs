//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods generic
//! over [`sqlx::Executor`], so the same call runs against the pool or inside
//! an open transaction (`&mut *tx`).

pub mod movement_repo;
pub mod product_repo;

pub use movement_repo::MovementRepo;
pub use product_repo::ProductRepo;
