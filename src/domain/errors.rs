//! Domain error types
//!
//! These errors are framework-agnostic and represent request-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Requested book does not exist
    NotFound,
    /// Datastore connectivity or query failure
    Database(String),
    /// Review API failure (transport, status or payload)
    External(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Book not found"),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
            DomainError::External(msg) => write!(f, "External service error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
