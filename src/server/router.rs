//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All endpoints are registered here with their OpenAPI docs,
//! and Swagger UI is served at `/api/docs`.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Largest accepted request body; 3D model uploads routinely exceed axum's 2 MB default.
pub const MAX_UPLOAD_BYTES: usize = 256 * 1024 * 1024;

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/models` / `POST /api/models` - List or create models
/// - `GET /api/models/{name}` / `PUT /api/models/{name}` - Fetch or replace a model
/// - `GET /api/ar/equipments` / `POST /api/ar/equipments` - List or register equipment
/// - `GET /api/ar/equipments/{tag}` - Resolve a tag to its full model
/// - `PUT /api/ar/equipments/{tag}` - Rename equipment
/// - `POST /api/ar/equipments/{tag}/qr-image` - Attach a QR image
/// - `POST /api/upload/model?name=` / `POST /api/upload/asset` - Upload files
/// - `GET /models/files/{key}` / `GET /qrcodes/{key}` - Serve stored files
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, storage, asset_base_url };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "MXLab", description = "MXLab AR model API"), tags(
        (name = controller::ar_model::AR_MODEL_TAG, description = "Hierarchical model trees"),
        (name = controller::equipment::EQUIPMENT_TAG, description = "Physical tags mapped to models"),
        (name = controller::asset::ASSET_TAG, description = "File uploads and downloads"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::ar_model::list_models,
            controller::ar_model::create_model
        ))
        .routes(routes!(
            controller::ar_model::get_model,
            controller::ar_model::update_model
        ))
        .routes(routes!(
            controller::equipment::list_equipments,
            controller::equipment::create_equipment
        ))
        .routes(routes!(
            controller::equipment::get_equipment,
            controller::equipment::update_equipment
        ))
        .routes(routes!(controller::equipment::upload_qr_image))
        .routes(routes!(controller::asset::upload_model_file))
        .routes(routes!(controller::asset::upload_asset))
        .routes(routes!(controller::asset::get_model_file))
        .routes(routes!(controller::asset::get_qr_image))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
