//! Companion Repository Port
//!
//! Abstract interface for reading Companion records.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Companion, CompanionWithCount};

/// Filter for companion listing queries
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompanionFilter {
    /// Restrict to companions in this category
    pub category_id: Option<String>,
    /// Case-insensitive substring match on the companion name
    pub name: Option<String>,
}

impl CompanionFilter {
    /// Build a filter, treating blank values as absent
    pub fn new(category_id: Option<String>, name: Option<String>) -> Self {
        Self {
            category_id: non_blank(category_id),
            name: non_blank(name),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category_id.is_none() && self.name.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Repository interface for Companion entities
#[async_trait]
pub trait CompanionRepository: Send + Sync {
    /// Find a Companion by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Companion>, DomainError>;

    /// Find Companions matching the filter, each with its message count, newest first
    async fn find_with_message_counts(
        &self,
        filter: &CompanionFilter,
    ) -> Result<Vec<CompanionWithCount>, DomainError>;
}
