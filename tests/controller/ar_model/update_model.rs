//! Tests for the update_model endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mxlab::server::controller::ar_model::update_model;

use super::*;
use crate::util::read_json;

/// Expect 200 OK with the stored video normalized
#[tokio::test]
async fn success_normalizes_video() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_model("Valve")
        .build()
        .await?;

    let payload = ModelDto {
        video: Some("clip.mp4".to_string()),
        ..model("Valve")
    };
    let result = update_model(
        State(test.into_app_state()),
        Path("Valve".to_string()),
        Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ModelDto = read_json(resp).await;
    assert_eq!(body.video.as_deref(), Some("/models/files/clip.mp4"));

    Ok(())
}

/// Expect 404 Not Found when the model does not exist
#[tokio::test]
async fn not_found_for_unknown_model() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = update_model(
        State(test.into_app_state()),
        Path("Valve".to_string()),
        Json(model("Valve")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 Conflict when renaming onto an existing model
#[tokio::test]
async fn conflict_for_rename_onto_existing_model() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_model("Valve")
        .with_mock_model("Actuator")
        .build()
        .await?;

    let result = update_model(
        State(test.into_app_state()),
        Path("Valve".to_string()),
        Json(model("Actuator")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
