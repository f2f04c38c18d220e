use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, ar_model::ModelDto},
    server::{error::Error, model::app::AppState, service::ar_model::ArModelService},
};

pub static AR_MODEL_TAG: &str = "ar_model";

/// List every model with resolved asset URLs
#[utoipa::path(
    get,
    path = "/api/models",
    tag = AR_MODEL_TAG,
    responses(
        (status = 200, description = "All models in insertion order", body = Vec<ModelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_models(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let model_service = ArModelService::new(&state.db, &state.asset_base_url);

    let models = model_service.list().await?;

    Ok((StatusCode::OK, Json(models)))
}

/// Create a model from a complete tree
#[utoipa::path(
    post,
    path = "/api/models",
    tag = AR_MODEL_TAG,
    request_body = ModelDto,
    responses(
        (status = 201, description = "Model created, returned as stored", body = ModelDto),
        (status = 400, description = "Empty name or hierarchy too deep", body = ErrorDto),
        (status = 409, description = "A model with this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_model(
    State(state): State<AppState>,
    Json(payload): Json<ModelDto>,
) -> Result<impl IntoResponse, Error> {
    let model_service = ArModelService::new(&state.db, &state.asset_base_url);

    let model = model_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(model)))
}

/// Get a model by name with resolved asset URLs
#[utoipa::path(
    get,
    path = "/api/models/{name}",
    tag = AR_MODEL_TAG,
    params(("name" = String, Path, description = "Unique model name")),
    responses(
        (status = 200, description = "The resolved model tree", body = ModelDto),
        (status = 404, description = "Model not found", body = ErrorDto),
        (status = 500, description = "Internal server error or corrupt record", body = ErrorDto)
    ),
)]
pub async fn get_model(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let model_service = ArModelService::new(&state.db, &state.asset_base_url);

    let model = model_service.get(&name).await?;

    Ok((StatusCode::OK, Json(model)))
}

/// Replace a model, renaming it when the body carries a different `id`
///
/// Equipment referencing the old name is not updated.
#[utoipa::path(
    put,
    path = "/api/models/{name}",
    tag = AR_MODEL_TAG,
    params(("name" = String, Path, description = "Current model name")),
    request_body = ModelDto,
    responses(
        (status = 200, description = "Model replaced, returned as stored", body = ModelDto),
        (status = 400, description = "Empty name or hierarchy too deep", body = ErrorDto),
        (status = 404, description = "Model not found", body = ErrorDto),
        (status = 409, description = "Rename target already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_model(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<ModelDto>,
) -> Result<impl IntoResponse, Error> {
    let model_service = ArModelService::new(&state.db, &state.asset_base_url);

    let model = model_service.update(&name, payload).await?;

    Ok((StatusCode::OK, Json(model)))
}
