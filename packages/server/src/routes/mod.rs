use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::experiment::*;
use crate::handlers::file::*;
use crate::handlers::product::*;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(experiment_routes())
        .merge(product_routes())
        .merge(file_routes())
}

fn experiment_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_experiments, create_experiment))
        .routes(routes!(get_experiment, update_experiment, delete_experiment))
}

fn product_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_products, create_product))
        .routes(routes!(get_product, update_product, delete_product))
}

fn file_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_files, create_file))
        .routes(routes!(get_file, update_file, delete_file))
}
