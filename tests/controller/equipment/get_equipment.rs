//! Tests for the get_equipment endpoint.
//!
//! The two not-found cases share a status code but carry different messages so the AR
//! client can tell an unknown tag from an unpublished model.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use mxlab::{model::api::ErrorDto, server::controller::equipment::get_equipment};

use super::*;
use crate::util::read_json;

/// Expect 200 OK with the model embedded
#[tokio::test]
async fn success_with_model() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_model("Valve")
        .with_mock_equipment("Valve", "T1")
        .build()
        .await?;

    let result = get_equipment(State(test.into_app_state()), Path("T1".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(resp).await;
    assert_eq!(body["tag"], "T1");
    assert_eq!(body["model"]["id"], "Valve");

    Ok(())
}

/// Expect 404 with an equipment message for an unknown tag
#[tokio::test]
async fn not_found_for_unknown_tag() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = get_equipment(State(test.into_app_state()), Path("unknown-tag".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "AR equipment not found");

    Ok(())
}

/// Expect 404 with a model message when the referenced model is missing
#[tokio::test]
async fn not_found_for_missing_model() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_equipment("Valve", "T1")
        .build()
        .await?;

    let result = get_equipment(State(test.into_app_state()), Path("T1".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "Model not found");

    Ok(())
}
