use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::crud;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::product::*;
use crate::models::shared::DeletedResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/products/",
    tag = "Products",
    operation_id = "listProducts",
    summary = "List all products",
    responses(
        (status = 200, description = "Every product", body = ProductListEnvelope),
    ),
)]
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(crud::list::<Products>(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    operation_id = "getProduct",
    summary = "Get a product by ID",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductEnvelope),
        (status = 404, description = "Product not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(crud::get::<Products>(&state.db, id).await?))
}

#[utoipa::path(
    post,
    path = "/products/",
    tag = "Products",
    operation_id = "createProduct",
    summary = "Create a product",
    description = "`name` and `experiment_id` are required; `desc` defaults to an empty string. The experiment is not checked for existence.",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductEnvelope),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name, experiment_id = payload.experiment_id))]
pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = crud::create::<Products>(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    operation_id = "updateProduct",
    summary = "Update a product",
    description = "Only the fields present in the body are modified.",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductEnvelope),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Product not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(crud::update::<Products>(&state.db, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    operation_id = "deleteProduct",
    summary = "Delete a product",
    description = "Files of the product are kept and still reference its ID.",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = DeletedResponse),
        (status = 404, description = "Product not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse>, AppError> {
    Ok(Json(crud::delete::<Products>(&state.db, id).await?))
}
