//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
///
/// A missing record is not represented here; lookups return `Option`.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl DomainError {
    pub fn storage<E: std::fmt::Display>(err: E) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}
