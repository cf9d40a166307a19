pub mod config;
pub mod crud;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod filter;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Remote Sensing Catalog API",
        version = "1.0.0",
        description = "Experiments, their data products and the files those products consist of"
    ),
    tags(
        (name = "Experiments", description = "Experiment CRUD operations"),
        (name = "Products", description = "Product CRUD operations"),
        (name = "Files", description = "File CRUD operations and date-range filtering"),
    ),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::api_routes())
        .split_for_parts();

    router
        .layer(middleware::cors_layer(&state.config.server.cors))
        .layer(middleware::tracing_layer())
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
}
