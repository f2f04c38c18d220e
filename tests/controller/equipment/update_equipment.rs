//! Tests for the update_equipment endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mxlab::{model::equipment::EquipmentDto, server::controller::equipment::update_equipment};

use super::*;
use crate::util::read_json;

/// Expect 200 OK with the new name and tag
#[tokio::test]
async fn success_renames_tag() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_equipment("Valve", "T1")
        .build()
        .await?;

    let result = update_equipment(
        State(test.into_app_state()),
        Path("T1".to_string()),
        Json(request("Pump", "T9")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: EquipmentDto = read_json(resp).await;
    assert_eq!(body.name, "Pump");
    assert_eq!(body.tag, "T9");

    Ok(())
}

/// Expect 404 Not Found for an unknown tag
#[tokio::test]
async fn not_found_for_unknown_tag() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = update_equipment(
        State(test.into_app_state()),
        Path("T1".to_string()),
        Json(request("Pump", "T1")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 Conflict when the new tag is taken
#[tokio::test]
async fn conflict_for_taken_tag() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_equipment("Valve", "T1")
        .with_mock_equipment("Pump", "T2")
        .build()
        .await?;

    let result = update_equipment(
        State(test.into_app_state()),
        Path("T1".to_string()),
        Json(request("Valve", "T2")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
