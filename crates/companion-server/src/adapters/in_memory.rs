//! In-memory repository implementations used by tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use companion::{
    Category, CategoryRepository, Companion, CompanionFilter, CompanionRepository,
    CompanionWithCount, DomainError,
};

/// Companion store holding records with precomputed message counts
#[derive(Default)]
pub struct InMemoryCompanionRepository {
    records: Vec<CompanionWithCount>,
    unavailable: bool,
}

impl InMemoryCompanionRepository {
    pub fn new(records: Vec<CompanionWithCount>) -> Self {
        Self {
            records,
            unavailable: false,
        }
    }

    /// A store whose every query fails
    pub fn unavailable() -> Self {
        Self {
            records: Vec::new(),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.unavailable {
            return Err(DomainError::StorageUnavailable(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CompanionRepository for InMemoryCompanionRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Companion>, DomainError> {
        self.check()?;
        Ok(self
            .records
            .iter()
            .find(|r| r.companion.id == id)
            .map(|r| r.companion.clone()))
    }

    async fn find_with_message_counts(
        &self,
        filter: &CompanionFilter,
    ) -> Result<Vec<CompanionWithCount>, DomainError> {
        self.check()?;
        let name = filter.name.as_ref().map(|n| n.to_lowercase());
        let mut matches: Vec<CompanionWithCount> = self
            .records
            .iter()
            .filter(|r| {
                filter
                    .category_id
                    .as_ref()
                    .map_or(true, |c| &r.companion.category_id == c)
            })
            .filter(|r| {
                name.as_ref()
                    .map_or(true, |n| r.companion.name.to_lowercase().contains(n))
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.companion.created_at.cmp(&a.companion.created_at));
        Ok(matches)
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
    unavailable: bool,
}

impl InMemoryCategoryRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: Mutex::new(categories),
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.unavailable {
            return Err(DomainError::StorageUnavailable(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        self.check()?;
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check()?;
        Ok(self.categories.lock().unwrap().len() as u64)
    }

    async fn insert_many(&self, categories: &[Category]) -> Result<u64, DomainError> {
        self.check()?;
        let mut stored = self.categories.lock().unwrap();
        let mut inserted = 0;
        for category in categories {
            if stored.iter().all(|c| c.id != category.id) {
                stored.push(category.clone());
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}

/// Fixture companion; `age_minutes` orders records newest first
pub fn sample_companion(
    id: &str,
    name: &str,
    category_id: &str,
    age_minutes: i64,
) -> Companion {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let created_at = base - Duration::minutes(age_minutes);
    Companion {
        id: id.to_string(),
        user_id: "user_1".to_string(),
        user_name: "alice".to_string(),
        src: format!("/avatars/{id}.png"),
        name: name.to_string(),
        description: format!("{name} companion"),
        instructions: format!("You are {name}."),
        seed: format!("Human: hello\n{name}: hi there"),
        category_id: category_id.to_string(),
        created_at,
        updated_at: created_at,
    }
}

pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::new("cat1", "Famous People"),
        Category::new("cat2", "Musicians"),
        Category::new("cat3", "Scientists"),
    ]
}
