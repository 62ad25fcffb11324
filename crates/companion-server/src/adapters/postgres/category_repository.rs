//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;

use companion::{Category, CategoryRepository, DomainError};

/// PostgreSQL implementation of CategoryRepository
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: String,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let rows = sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(DomainError::storage)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(DomainError::storage)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn insert_many(&self, categories: &[Category]) -> Result<u64, DomainError> {
        let mut tx = self.pool.begin().await.map_err(DomainError::storage)?;
        let mut inserted = 0;

        for category in categories {
            let result = sqlx::query(
                r#"
                INSERT INTO categories (id, name)
                VALUES ($1, $2)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&category.id)
            .bind(&category.name)
            .execute(&mut *tx)
            .await
            .map_err(DomainError::storage)?;

            inserted += result.rows_affected();
        }

        tx.commit().await.map_err(DomainError::storage)?;

        Ok(inserted)
    }
}
