//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers only extract the request and delegate to [`crate::services`];
//! errors map to HTTP responses via [`crate::error::AppError`].

pub mod movements;
pub mod products;
