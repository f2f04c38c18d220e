//! Tests for the create_model endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use mxlab::server::controller::ar_model::create_model;

use super::*;

/// Expect 201 Created for a new model
#[tokio::test]
async fn created_for_new_model() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = create_model(State(test.into_app_state()), Json(valve_with_handle())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 409 Conflict for a duplicate name
#[tokio::test]
async fn conflict_for_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_model("Valve")
        .build()
        .await?;

    let result = create_model(State(test.into_app_state()), Json(model("Valve"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 Bad Request for an empty name
#[tokio::test]
async fn bad_request_for_empty_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = create_model(State(test.into_app_state()), Json(model(""))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 Internal Server Error when required tables are missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = create_model(State(test.into_app_state()), Json(model("Valve"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
