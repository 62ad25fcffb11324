//! PostgreSQL implementation of CompanionRepository

use async_trait::async_trait;
use sqlx::PgPool;

use companion::{Companion, CompanionFilter, CompanionRepository, CompanionWithCount, DomainError};

/// PostgreSQL implementation of CompanionRepository
pub struct PgCompanionRepository {
    pool: PgPool,
}

impl PgCompanionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CompanionRow {
    id: String,
    user_id: String,
    user_name: String,
    src: String,
    name: String,
    description: String,
    instructions: String,
    seed: String,
    category_id: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<CompanionRow> for Companion {
    fn from(row: CompanionRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            user_name: row.user_name,
            src: row.src,
            name: row.name,
            description: row.description,
            instructions: row.instructions,
            seed: row.seed,
            category_id: row.category_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CompanionCountRow {
    #[sqlx(flatten)]
    companion: CompanionRow,
    message_count: i64,
}

impl From<CompanionCountRow> for CompanionWithCount {
    fn from(row: CompanionCountRow) -> Self {
        // COUNT(*) is never negative
        let message_count = u64::try_from(row.message_count).unwrap_or_default();
        CompanionWithCount::new(row.companion.into(), message_count)
    }
}

/// Name matching is a literal substring test; `%` and `_` are not wildcards
const FIND_WITH_COUNTS_SQL: &str = r#"
    SELECT c.id, c.user_id, c.user_name, c.src, c.name, c.description,
           c.instructions, c.seed, c.category_id, c.created_at, c.updated_at,
           COUNT(m.id) AS message_count
    FROM companions c
    LEFT JOIN messages m ON m.companion_id = c.id
    WHERE ($1::TEXT IS NULL OR c.category_id = $1)
      AND ($2::TEXT IS NULL OR strpos(lower(c.name), lower($2)) > 0)
    GROUP BY c.id
    ORDER BY c.created_at DESC
"#;

#[async_trait]
impl CompanionRepository for PgCompanionRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Companion>, DomainError> {
        let row = sqlx::query_as::<_, CompanionRow>("SELECT * FROM companions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DomainError::storage)?;

        Ok(row.map(Into::into))
    }

    async fn find_with_message_counts(
        &self,
        filter: &CompanionFilter,
    ) -> Result<Vec<CompanionWithCount>, DomainError> {
        let rows = sqlx::query_as::<_, CompanionCountRow>(FIND_WITH_COUNTS_SQL)
            .bind(&filter.category_id)
            .bind(&filter.name)
            .fetch_all(&self.pool)
            .await
            .map_err(DomainError::storage)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
