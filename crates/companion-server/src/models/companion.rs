//! Companion Request/Response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use companion::{Category, Companion, CompanionFilter};

use crate::application::CompanionEditContext;

/// Companion as returned by the API
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompanionResponse {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub src: String,
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub seed: String,
    pub category_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Companion> for CompanionResponse {
    fn from(companion: Companion) -> Self {
        Self {
            id: companion.id,
            user_id: companion.user_id,
            user_name: companion.user_name,
            src: companion.src,
            name: companion.name,
            description: companion.description,
            instructions: companion.instructions,
            seed: companion.seed,
            category_id: companion.category_id,
            created_at: companion.created_at,
            updated_at: companion.updated_at,
        }
    }
}

/// Category as returned by the API
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

/// Input for the companion edit form.
///
/// `companion` is null when no companion has the requested ID.
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanionEditContextResponse {
    pub companion: Option<CompanionResponse>,
    pub categories: Vec<CategoryResponse>,
}

impl From<CompanionEditContext> for CompanionEditContextResponse {
    fn from(context: CompanionEditContext) -> Self {
        Self {
            companion: context.companion.into_option().map(Into::into),
            categories: context.categories.into_iter().map(Into::into).collect(),
        }
    }
}

/// Query parameters for the companion listing
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCompanionsQuery {
    /// Only companions in this category
    #[serde(default, rename = "categoryId")]
    pub category_id: Option<String>,
    /// Case-insensitive name search
    #[serde(default)]
    pub name: Option<String>,
}

impl From<ListCompanionsQuery> for CompanionFilter {
    fn from(query: ListCompanionsQuery) -> Self {
        CompanionFilter::new(query.category_id, query.name)
    }
}
