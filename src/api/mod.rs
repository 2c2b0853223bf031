//! HTTP-facing DTOs and framework adapters.

mod types;

pub use types::*;

#[cfg(feature = "axum")]
pub mod axum;
