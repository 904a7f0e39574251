//! Route definitions for the API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::status, handlers::analyze),
    components(schemas(
        crate::api::types::AnalyzeRequest,
        crate::domain::Summary,
        crate::domain::ServiceStatus,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "status", description = "Service liveness"),
        (name = "analysis", description = "Numeric aggregation")
    ),
    info(
        title = "DevSecOps Platform API",
        version = "0.1.0",
        description = "Service status and numeric aggregation endpoints",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
///
/// Swagger UI and the OpenAPI document are mounted only when `docs_enabled`.
pub fn build_router(state: AppState, docs_enabled: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(handlers::status))
        .route("/analyze", post(handlers::analyze))
        .with_state(state);

    if docs_enabled {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router.layer(TraceLayer::new_for_http()).layer(cors)
}
