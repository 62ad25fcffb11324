//! Companion API Routes
//!
//! - /companion/:companion_id - Edit form context (companion + categories)
//! - /companions - Companion listing with message counts
//! - /categories - Category list

use axum::http::StatusCode;

use ::companion::DomainError;

pub mod category;
pub mod companion;
pub mod swagger;

pub type ApiError = (StatusCode, String);

/// Storage failures surface as 503; there is no other domain error
pub(crate) fn storage_error(err: DomainError) -> ApiError {
    tracing::warn!("Request failed: {}", err);
    match err {
        DomainError::StorageUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use ::companion::CompanionWithCount;

    use crate::adapters::in_memory::{
        sample_categories, sample_companion, InMemoryCategoryRepository,
        InMemoryCompanionRepository,
    };
    use crate::{app, AppState};

    fn test_app(companions: InMemoryCompanionRepository) -> Router {
        test_app_with(
            companions,
            InMemoryCategoryRepository::new(sample_categories()),
        )
    }

    fn test_app_with(
        companions: InMemoryCompanionRepository,
        categories: InMemoryCategoryRepository,
    ) -> Router {
        let state = AppState::new(Arc::new(companions), Arc::new(categories));
        app(state, false)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed");
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_edit_context_for_missing_companion() {
        let app = test_app(InMemoryCompanionRepository::new(vec![]));

        let (status, body) = get_json(app, "/companion/abc123").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["companion"].is_null());
        assert_eq!(body["categories"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["categories"][0]["name"], "Famous People");
    }

    #[tokio::test]
    async fn test_edit_context_for_existing_companion() {
        let app = test_app(InMemoryCompanionRepository::new(vec![
            CompanionWithCount::new(sample_companion("xyz", "Tutor", "cat3", 0), 4),
        ]));

        let (status, body) = get_json(app, "/companion/xyz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["companion"]["id"], "xyz");
        assert_eq!(body["companion"]["name"], "Tutor");
        assert_eq!(body["companion"]["category_id"], "cat3");
        assert_eq!(body["categories"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_edit_context_storage_failure_is_503() {
        let app = test_app(InMemoryCompanionRepository::unavailable());

        let (status, _) = get_json(app, "/companion/xyz").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_edit_context_category_failure_is_503() {
        let app = test_app_with(
            InMemoryCompanionRepository::new(vec![CompanionWithCount::new(
                sample_companion("xyz", "Tutor", "cat3", 0),
                0,
            )]),
            InMemoryCategoryRepository::unavailable(),
        );

        let (status, _) = get_json(app, "/companion/xyz").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_list_storage_failure_is_503() {
        let app = test_app(InMemoryCompanionRepository::unavailable());

        let (status, _) = get_json(app, "/companions").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_categories_storage_failure_is_503() {
        let app = test_app_with(
            InMemoryCompanionRepository::new(vec![]),
            InMemoryCategoryRepository::unavailable(),
        );

        let (status, _) = get_json(app, "/categories").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_list_empty_state() {
        let app = test_app(InMemoryCompanionRepository::new(vec![]));

        let (status, body) = get_json(app, "/companions").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "empty");
        assert_eq!(body["message"], "No companions found.");
        assert_eq!(body["image"]["src"], "/empty.png");
    }

    #[tokio::test]
    async fn test_list_with_items_and_filters() {
        let app = test_app(InMemoryCompanionRepository::new(vec![
            CompanionWithCount::new(sample_companion("a", "Tutor", "cat3", 10), 5),
            CompanionWithCount::new(sample_companion("b", "Chef", "cat1", 0), 0),
        ]));

        let (status, body) = get_json(app.clone(), "/companions").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "list");
        assert_eq!(body["items"][0]["id"], "b");
        assert_eq!(body["items"][1]["message_count"], 5);

        let (_, body) = get_json(app.clone(), "/companions?categoryId=cat3").await;
        assert_eq!(body["items"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["items"][0]["id"], "a");

        let (_, body) = get_json(app.clone(), "/companions?name=nobody").await;
        assert_eq!(body["kind"], "empty");

        let (status, body) =
            get_json(app, "/companions?categoryId=cat3&category_id=cat1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["items"][0]["id"], "a");
    }

    #[tokio::test]
    async fn test_list_categories() {
        let app = test_app(InMemoryCompanionRepository::new(vec![]));

        let (status, body) = get_json(app, "/categories").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_openapi_documents_category_id_param() {
        let app = test_app(InMemoryCompanionRepository::new(vec![]));

        let (status, body) = get_json(app, "/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        let params = body["paths"]["/companions"]["get"]["parameters"]
            .as_array()
            .cloned()
            .unwrap_or_default();
        let names: Vec<&str> = params.iter().filter_map(|p| p["name"].as_str()).collect();
        assert!(names.contains(&"categoryId"));
        assert!(!names.contains(&"category_id"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = test_app(InMemoryCompanionRepository::new(vec![]));

        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
