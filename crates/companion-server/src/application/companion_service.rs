//! Companion Application Service (Use Case)
//!
//! Read-side queries backing the companion listing.

use std::sync::Arc;

use companion::{
    Category, CategoryRepository, CompanionFilter, CompanionRepository, CompanionWithCount,
    DomainError,
};

/// Application service for companion listing
pub struct CompanionService<C, K>
where
    C: CompanionRepository + ?Sized,
    K: CategoryRepository + ?Sized,
{
    companions: Arc<C>,
    categories: Arc<K>,
}

impl<C, K> CompanionService<C, K>
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

    /// List companions matching the filter with their message counts, newest first
    pub async fn list_companions(
        &self,
        filter: &CompanionFilter,
    ) -> Result<Vec<CompanionWithCount>, DomainError> {
        let items = self.companions.find_with_message_counts(filter).await?;
        if filter.is_empty() {
            tracing::debug!("Listed {} companions", items.len());
        } else {
            tracing::debug!("Listed {} companions (filter: {:?})", items.len(), filter);
        }
        Ok(items)
    }

    /// List all categories
    pub async fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        self.categories.find_all().await
    }
}
