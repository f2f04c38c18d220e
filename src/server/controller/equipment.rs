use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        equipment::{EquipmentDto, EquipmentRequestDto, FullEquipmentDto},
    },
    server::{
        controller::util::multipart::{read_file_field, FileUploadForm},
        error::Error,
        model::app::AppState,
        service::equipment::EquipmentService,
    },
};

pub static EQUIPMENT_TAG: &str = "ar_equipment";

/// List every registered equipment
#[utoipa::path(
    get,
    path = "/api/ar/equipments",
    tag = EQUIPMENT_TAG,
    responses(
        (status = 200, description = "All equipment in registration order", body = Vec<EquipmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_equipments(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let equipment_service =
        EquipmentService::new(&state.db, state.storage.as_ref(), &state.asset_base_url);

    let equipments = equipment_service.list().await?;

    Ok((StatusCode::OK, Json(equipments)))
}

/// Register a tag for a model, which does not need to exist yet
#[utoipa::path(
    post,
    path = "/api/ar/equipments",
    tag = EQUIPMENT_TAG,
    request_body = EquipmentRequestDto,
    responses(
        (status = 201, description = "Equipment registered", body = EquipmentDto),
        (status = 400, description = "Empty name or tag", body = ErrorDto),
        (status = 409, description = "Tag already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    Json(payload): Json<EquipmentRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let equipment_service =
        EquipmentService::new(&state.db, state.storage.as_ref(), &state.asset_base_url);

    let equipment = equipment_service.create(payload.name, payload.tag).await?;

    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Resolve a scanned tag to its equipment and fully resolved model
///
/// The two 404 bodies differ: "AR equipment not found" for an unknown tag and
/// "Model not found" when the equipment points at a missing model.
#[utoipa::path(
    get,
    path = "/api/ar/equipments/{tag}",
    tag = EQUIPMENT_TAG,
    params(("tag" = String, Path, description = "Equipment tag")),
    responses(
        (status = 200, description = "Equipment with its resolved model", body = FullEquipmentDto),
        (status = 404, description = "Equipment or referenced model not found", body = ErrorDto),
        (status = 500, description = "Internal server error or corrupt record", body = ErrorDto)
    ),
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let equipment_service =
        EquipmentService::new(&state.db, state.storage.as_ref(), &state.asset_base_url);

    let full = equipment_service.resolve_full(&tag).await?;

    Ok((StatusCode::OK, Json(full)))
}

/// Change the model name and tag of an equipment
#[utoipa::path(
    put,
    path = "/api/ar/equipments/{tag}",
    tag = EQUIPMENT_TAG,
    params(("tag" = String, Path, description = "Current equipment tag")),
    request_body = EquipmentRequestDto,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentDto),
        (status = 400, description = "Empty name or tag", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 409, description = "New tag already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    Path(tag): Path<String>,
    Json(payload): Json<EquipmentRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let equipment_service =
        EquipmentService::new(&state.db, state.storage.as_ref(), &state.asset_base_url);

    let equipment = equipment_service
        .update(&tag, payload.name, payload.tag)
        .await?;

    Ok((StatusCode::OK, Json(equipment)))
}

/// Attach a QR code image to an equipment
#[utoipa::path(
    post,
    path = "/api/ar/equipments/{tag}/qr-image",
    tag = EQUIPMENT_TAG,
    params(("tag" = String, Path, description = "Equipment tag")),
    request_body(content = FileUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "QR image stored", body = EquipmentDto),
        (status = 400, description = "Missing file field", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_qr_image(
    State(state): State<AppState>,
    Path(tag): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let equipment_service =
        EquipmentService::new(&state.db, state.storage.as_ref(), &state.asset_base_url);

    let file = read_file_field(&mut multipart).await?;
    let equipment = equipment_service
        .attach_qr_image(&tag, file.data, &file.filename)
        .await?;

    Ok((StatusCode::OK, Json(equipment)))
}
