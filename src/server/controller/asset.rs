use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        upload::{UploadedAssetDto, UploadedModelFileDto},
    },
    server::{
        controller::util::multipart::{read_file_field, FileUploadForm},
        error::Error,
        model::app::AppState,
        service::asset::AssetService,
        storage::namespaces,
    },
};

pub static ASSET_TAG: &str = "asset";

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UploadModelParams {
    /// Model whose `modelFileUrl` should point at the uploaded file
    pub name: String,
}

/// Upload a 3D model file and attach it to an existing model
#[utoipa::path(
    post,
    path = "/api/upload/model",
    tag = ASSET_TAG,
    params(UploadModelParams),
    request_body(content = FileUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = UploadedModelFileDto),
        (status = 400, description = "Missing file field or unusable filename", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_model_file(
    State(state): State<AppState>,
    Query(params): Query<UploadModelParams>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let asset_service = AssetService::new(&state.db, state.storage.as_ref());

    let file = read_file_field(&mut multipart).await?;
    let uploaded = asset_service
        .upload_model_file(&params.name, file.data, &file.filename)
        .await?;

    Ok((StatusCode::OK, Json(uploaded)))
}

/// Upload a button image, video or datasheet
#[utoipa::path(
    post,
    path = "/api/upload/asset",
    tag = ASSET_TAG,
    request_body(content = FileUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = UploadedAssetDto),
        (status = 400, description = "Missing file field or unusable filename", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_asset(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let asset_service = AssetService::new(&state.db, state.storage.as_ref());

    let file = read_file_field(&mut multipart).await?;
    let uploaded = asset_service.upload_asset(file.data, &file.filename).await?;

    Ok((StatusCode::OK, Json(uploaded)))
}

/// Serve a stored model asset
#[utoipa::path(
    get,
    path = "/models/files/{key}",
    tag = ASSET_TAG,
    params(("key" = String, Path, description = "Sanitized storage key")),
    responses(
        (status = 200, description = "File contents"),
        (status = 400, description = "Invalid key", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto)
    ),
)]
pub async fn get_model_file(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, Error> {
    serve(&state, namespaces::MODELS, &key).await
}

/// Serve a stored QR image
#[utoipa::path(
    get,
    path = "/qrcodes/{key}",
    tag = ASSET_TAG,
    params(("key" = String, Path, description = "Sanitized storage key")),
    responses(
        (status = 200, description = "File contents"),
        (status = 400, description = "Invalid key", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto)
    ),
)]
pub async fn get_qr_image(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, Error> {
    serve(&state, namespaces::QR_CODES, &key).await
}

async fn serve(state: &AppState, namespace: &str, key: &str) -> Result<impl IntoResponse, Error> {
    let asset_service = AssetService::new(&state.db, state.storage.as_ref());

    let file = asset_service.fetch(namespace, key).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, file.content_type)],
        file.data,
    ))
}
