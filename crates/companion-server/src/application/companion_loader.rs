//! Companion Loader (Use Case)
//!
//! Resolves a companion ID plus the full category set into the
//! context consumed by the companion edit form.

use std::sync::Arc;

use companion::{Category, CategoryRepository, CompanionLookup, CompanionRepository, DomainError};

/// Everything the companion edit form needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionEditContext {
    pub companion: CompanionLookup,
    pub categories: Vec<Category>,
}

/// Application service loading companion edit contexts
pub struct CompanionLoader<C, K>
where
    C: CompanionRepository + ?Sized,
    K: CategoryRepository + ?Sized,
{
    companions: Arc<C>,
    categories: Arc<K>,
}

impl<C, K> CompanionLoader<C, K>
where
    C: CompanionRepository + ?Sized,
    K: CategoryRepository + ?Sized,
{
    pub fn new(companions: Arc<C>, categories: Arc<K>) -> Self {
        Self {
            companions,
            categories,
        }
    }

    /// Load a companion (if it exists) together with every category.
    ///
    /// The two reads are independent and run concurrently. An unknown ID
    /// yields `CompanionLookup::NotFound`; only storage failures are errors.
    pub async fn load_companion_edit_context(
        &self,
        companion_id: &str,
    ) -> Result<CompanionEditContext, DomainError> {
        let (companion, categories) = tokio::try_join!(
            self.companions.find_by_id(companion_id),
            self.categories.find_all()
        )?;

        let companion = CompanionLookup::from(companion);
        tracing::debug!(
            "Loaded edit context for companion {}: found={}, categories={}",
            companion_id,
            companion.is_found(),
            categories.len()
        );

        Ok(CompanionEditContext {
            companion,
            categories,
        })
    }
}
