//! Companion Domain Library
//!
//! Core domain types and storage interfaces for companion (AI persona) records.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities
//!   - `entities/`: Core domain models (Companion, CompanionWithCount, Category)
//!   - `value_objects/`: Immutable value types (CompanionLookup)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use companion::{Companion, CompanionLookup};
//! use companion::{CategoryRepository, CompanionRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{Category, Companion, CompanionLookup, CompanionWithCount, DomainError};
pub use ports::{CategoryRepository, CompanionFilter, CompanionRepository};
