//! Category Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Category};

/// Repository interface for Category entities
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find all Categories
    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;

    /// Count stored Categories
    async fn count(&self) -> Result<u64, DomainError>;

    /// Insert Categories, skipping any whose ID already exists
    async fn insert_many(&self, categories: &[Category]) -> Result<u64, DomainError>;
}
