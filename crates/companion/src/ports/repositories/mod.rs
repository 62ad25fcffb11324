//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod category_repository;
mod companion_repository;

pub use category_repository::*;
pub use companion_repository::*;
