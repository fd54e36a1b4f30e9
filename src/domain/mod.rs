//! Domain layer - Pure business abstractions
//!
//! Trait definitions, domain error types and the offset arithmetic used for
//! paging. Nothing here talks to axum.

pub mod errors;
pub mod pagination;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::*;
