use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::crud::{self, Resource};
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::{AppJson, OptionalJson};
use crate::filter;
use crate::models::file::*;
use crate::models::shared::{DeletedResponse, Envelope};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/files/",
    tag = "Files",
    operation_id = "listFiles",
    summary = "List files, optionally filtered",
    description = "Without a body (or with `{}`) every file is returned. With a body, the selection is \
        the files of the listed products and of every product of the listed experiments, restricted \
        to `start_date <= dateTime <= end_date` (both inclusive, both optional). A body that lists \
        neither products nor experiments selects no file.",
    request_body(content = FileFilterRequest, description = "Optional filter"),
    responses(
        (status = 200, description = "Matching files", body = FileListEnvelope),
        (status = 400, description = "Malformed filter (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn list_files(
    State(state): State<AppState>,
    OptionalJson(payload): OptionalJson<FileFilterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let files = filter::list_files(&state.db, payload).await?;
    let files: Vec<FileResponse> = files.into_iter().map(FileResponse::from).collect();
    Ok(Json(Envelope::new(Files::PLURAL, files)))
}

#[utoipa::path(
    get,
    path = "/files/{id}",
    tag = "Files",
    operation_id = "getFile",
    summary = "Get a file by ID",
    params(("id" = i32, Path, description = "File ID")),
    responses(
        (status = 200, description = "File details", body = FileEnvelope),
        (status = 404, description = "File not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(crud::get::<Files>(&state.db, id).await?))
}

#[utoipa::path(
    post,
    path = "/files/",
    tag = "Files",
    operation_id = "createFile",
    summary = "Register a file",
    description = "`path` and `product_id` are required. `dateTime` defaults to `1900-01-01 00:00:00`, \
        `level` to an empty string. The product is not checked for existence.",
    request_body = CreateFileRequest,
    responses(
        (status = 201, description = "File created", body = FileEnvelope),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(product_id = payload.product_id))]
pub async fn create_file(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateFileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = crud::create::<Files>(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/files/{id}",
    tag = "Files",
    operation_id = "updateFile",
    summary = "Update a file",
    description = "Only the fields present in the body are modified. A malformed `dateTime` \
        rejects the whole update.",
    params(("id" = i32, Path, description = "File ID")),
    request_body = UpdateFileRequest,
    responses(
        (status = 200, description = "File updated", body = FileEnvelope),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "File not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateFileRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(crud::update::<Files>(&state.db, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/files/{id}",
    tag = "Files",
    operation_id = "deleteFile",
    summary = "Delete a file",
    params(("id" = i32, Path, description = "File ID")),
    responses(
        (status = 200, description = "File deleted", body = DeletedResponse),
        (status = 404, description = "File not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse>, AppError> {
    Ok(Json(crud::delete::<Files>(&state.db, id).await?))
}
