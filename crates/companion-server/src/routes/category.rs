//! Category Routes

use axum::{extract::State, routing::get, Json, Router};

use crate::models::CategoryResponse;
use crate::AppState;

use super::{storage_error, ApiError};

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryResponse>),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Category"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let categories = state
        .companion_service
        .list_categories()
        .await
        .map_err(storage_error)?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/categories", get(list_categories))
}
