//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories.

mod category_seeder;
mod companion_loader;
mod companion_service;

pub use category_seeder::seed_default_categories;
pub use companion_loader::{CompanionEditContext, CompanionLoader};
pub use companion_service::CompanionService;
