//! Tests for the get_model and list_models endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use mxlab::server::{
    controller::ar_model::{get_model, list_models},
    service::ar_model::ArModelService,
};

use super::*;
use crate::util::read_json;

/// Expect 200 OK with nested button images resolved
#[tokio::test]
async fn success_with_resolved_tree() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let state = test.into_app_state();
    ArModelService::new(&state.db, "")
        .create(valve_with_handle())
        .await
        .unwrap();

    let result = get_model(State(state), Path("Valve".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(resp).await;
    assert_eq!(body["id"], "Valve");
    assert_eq!(
        body["parts"][0]["buttons"][0]["imageUrl"],
        "/models/files/icon.png"
    );

    Ok(())
}

/// Expect 404 Not Found for an unknown model
#[tokio::test]
async fn not_found_for_unknown_model() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = get_model(State(test.into_app_state()), Path("Valve".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 Internal Server Error, not 404, for a corrupt stored record
#[tokio::test]
async fn error_for_corrupt_record() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    test.model()
        .insert_model_with_columns("Valve", Some("[{"), None, None)
        .await?;

    let result = get_model(State(test.into_app_state()), Path("Valve".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 200 OK listing every model
#[tokio::test]
async fn lists_all_models() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_model("Valve")
        .with_mock_model("Actuator")
        .build()
        .await?;

    let result = list_models(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<ModelDto> = read_json(resp).await;
    assert_eq!(body.len(), 2);

    Ok(())
}
