use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use companion::{CategoryRepository, CompanionRepository};

mod adapters;
mod application;
mod config;
mod models;
mod routes;
mod views;

use adapters::{PgCategoryRepository, PgCompanionRepository};
use application::{seed_default_categories, CompanionLoader, CompanionService};
use config::ServerConfig;

/// Application services over injected storage ports
pub type AppCompanionLoader = CompanionLoader<dyn CompanionRepository, dyn CategoryRepository>;
pub type AppCompanionService = CompanionService<dyn CompanionRepository, dyn CategoryRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub companion_loader: Arc<AppCompanionLoader>,
    pub companion_service: Arc<AppCompanionService>,
}

impl AppState {
    pub fn new(
        companions: Arc<dyn CompanionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            companion_loader: Arc::new(CompanionLoader::new(
                companions.clone(),
                categories.clone(),
            )),
            companion_service: Arc::new(CompanionService::new(companions, categories)),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Companion API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router
pub fn app(state: AppState, cors_permissive: bool) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::companion::router())
        .merge(routes::category::router());

    let router = if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Companion API initializing...");

    let config = ServerConfig::from_secrets(&secrets).context("Invalid server configuration")?;
    tracing::debug!("Server config: {:?}", config);

    if config.run_migrations {
        sqlx::migrate!()
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("✅ Database migrations completed");
    } else {
        tracing::warn!("⚠️  RUN_MIGRATIONS disabled - assuming schema is current");
    }

    let companion_repo: Arc<dyn CompanionRepository> =
        Arc::new(PgCompanionRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> = Arc::new(PgCategoryRepository::new(pool));

    if config.seed_categories {
        seed_default_categories(category_repo.as_ref())
            .await
            .context("Failed to seed default categories")?;
    }

    let state = AppState::new(companion_repo, category_repo);
    let router = app(state, config.cors_permissive);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Companion API ready");

    Ok(router.into())
}
