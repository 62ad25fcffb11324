//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CategoryResponse, CompanionEditContextResponse, CompanionResponse};
use crate::views::{CompanionSummary, ImagePlaceholder, RenderedOutput};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::companion::get_companion_edit_context,
        super::companion::list_companions,
        super::category::list_categories,
    ),
    info(
        title = "Companion API",
        version = "0.1.0",
        description = "Read API for companion (AI persona) records and their categories.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Companion", description = "Companion edit context and listing"),
        (name = "Category", description = "Companion categories"),
    ),
    components(
        schemas(
            CompanionResponse,
            CategoryResponse,
            CompanionEditContextResponse,
            RenderedOutput,
            ImagePlaceholder,
            CompanionSummary,
        )
    ),
)]
pub struct ApiDoc;
