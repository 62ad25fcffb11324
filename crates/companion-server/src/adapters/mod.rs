//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

#[cfg(test)]
pub mod in_memory;
pub mod postgres;

// Re-exports
pub use postgres::{PgCategoryRepository, PgCompanionRepository};
