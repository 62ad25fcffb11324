//! PostgreSQL Repository Implementations

mod category_repository;
mod companion_repository;

pub use category_repository::PgCategoryRepository;
pub use companion_repository::PgCompanionRepository;
