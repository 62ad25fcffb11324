//! Companion Routes
//!
//! HTTP handlers that delegate to the companion loader and listing service.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::models::{CompanionEditContextResponse, ListCompanionsQuery};
use crate::views::{CompanionListView, RenderedOutput};
use crate::AppState;

use super::{storage_error, ApiError};

/// Load the companion edit form context
#[utoipa::path(
    get,
    path = "/companion/{companion_id}",
    params(
        ("companion_id" = String, Path, description = "Companion ID")
    ),
    responses(
        (status = 200, description = "Edit context (companion is null when not found)",
            body = CompanionEditContextResponse),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Companion"
)]
pub async fn get_companion_edit_context(
    State(state): State<AppState>,
    Path(companion_id): Path<String>,
) -> Result<Json<CompanionEditContextResponse>, ApiError> {
    // TODO: check subscription once access control exists
    let context = state
        .companion_loader
        .load_companion_edit_context(&companion_id)
        .await
        .map_err(storage_error)?;

    Ok(Json(context.into()))
}

/// List companions, or the empty state when nothing matches
#[utoipa::path(
    get,
    path = "/companions",
    params(ListCompanionsQuery),
    responses(
        (status = 200, description = "Rendered companion listing", body = RenderedOutput),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Companion"
)]
pub async fn list_companions(
    State(state): State<AppState>,
    Query(query): Query<ListCompanionsQuery>,
) -> Result<Json<RenderedOutput>, ApiError> {
    let items = state
        .companion_service
        .list_companions(&query.into())
        .await
        .map_err(storage_error)?;

    let output = CompanionListView::present(&items);
    if output.is_empty_state() {
        tracing::debug!("No companions matched, rendering empty state");
    }

    Ok(Json(output))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/companion/:companion_id", get(get_companion_edit_context))
        .route("/companions", get(list_companions))
}
