use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::crud;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::experiment::*;
use crate::models::shared::DeletedResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/experiments/",
    tag = "Experiments",
    operation_id = "listExperiments",
    summary = "List all experiments",
    responses(
        (status = 200, description = "Every experiment", body = ExperimentListEnvelope),
    ),
)]
#[instrument(skip(state))]
pub async fn list_experiments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(crud::list::<Experiments>(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/experiments/{id}",
    tag = "Experiments",
    operation_id = "getExperiment",
    summary = "Get an experiment by ID",
    params(("id" = i32, Path, description = "Experiment ID")),
    responses(
        (status = 200, description = "Experiment details", body = ExperimentEnvelope),
        (status = 404, description = "Experiment not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_experiment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(crud::get::<Experiments>(&state.db, id).await?))
}

#[utoipa::path(
    post,
    path = "/experiments/",
    tag = "Experiments",
    operation_id = "createExperiment",
    summary = "Create an experiment",
    description = "`name` is required; `desc` defaults to an empty string.",
    request_body = CreateExperimentRequest,
    responses(
        (status = 201, description = "Experiment created", body = ExperimentEnvelope),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_experiment(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateExperimentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = crud::create::<Experiments>(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/experiments/{id}",
    tag = "Experiments",
    operation_id = "updateExperiment",
    summary = "Update an experiment",
    description = "Only the fields present in the body are modified.",
    params(("id" = i32, Path, description = "Experiment ID")),
    request_body = UpdateExperimentRequest,
    responses(
        (status = 200, description = "Experiment updated", body = ExperimentEnvelope),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Experiment not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_experiment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateExperimentRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(crud::update::<Experiments>(&state.db, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/experiments/{id}",
    tag = "Experiments",
    operation_id = "deleteExperiment",
    summary = "Delete an experiment",
    description = "Products of the experiment are kept and still reference its ID.",
    params(("id" = i32, Path, description = "Experiment ID")),
    responses(
        (status = 200, description = "Experiment deleted", body = DeletedResponse),
        (status = 404, description = "Experiment not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_experiment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse>, AppError> {
    Ok(Json(crud::delete::<Experiments>(&state.db, id).await?))
}
