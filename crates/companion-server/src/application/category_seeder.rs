//! Category Seeding
//!
//! Populates an empty categories table with the default set.

use uuid::Uuid;

use companion::{Category, CategoryRepository, DomainError};

pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Famous People",
    "Movies & TV",
    "Musicians",
    "Games",
    "Animals",
    "Philosophy",
    "Scientists",
];

/// Insert the default categories if none exist yet.
///
/// Returns the number of categories inserted (0 when the table was not empty).
pub async fn seed_default_categories<K>(repo: &K) -> Result<u64, DomainError>
where
    K: CategoryRepository + ?Sized,
{
    let existing = repo.count().await?;
    if existing > 0 {
        tracing::debug!("Skipping category seed, {} categories present", existing);
        return Ok(0);
    }

    let categories: Vec<Category> = DEFAULT_CATEGORIES
        .iter()
        .map(|name| Category::new(Uuid::new_v4().to_string(), *name))
        .collect();

    let inserted = repo.insert_many(&categories).await?;
    tracing::info!("Seeded {} default categories", inserted);

    Ok(inserted)
}
