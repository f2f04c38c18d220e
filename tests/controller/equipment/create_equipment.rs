//! Tests for the create_equipment and list_equipments endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use mxlab::{
    model::equipment::EquipmentDto,
    server::controller::equipment::{create_equipment, list_equipments},
};

use super::*;
use crate::util::read_json;

/// Expect 201 Created even though the referenced model does not exist
#[tokio::test]
async fn created_without_model() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = create_equipment(State(test.into_app_state()), Json(request("Valve", "T1"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: EquipmentDto = read_json(resp).await;
    assert_eq!(body.tag, "T1");
    assert_eq!(body.qr_image_url, None);

    Ok(())
}

/// Expect 409 Conflict for a registered tag
#[tokio::test]
async fn conflict_for_duplicate_tag() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_equipment("Valve", "T1")
        .build()
        .await?;

    let result = create_equipment(State(test.into_app_state()), Json(request("Pump", "T1"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 Bad Request for an empty name
#[tokio::test]
async fn bad_request_for_empty_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = create_equipment(State(test.into_app_state()), Json(request("", "T1"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK listing all equipment
#[tokio::test]
async fn lists_all_equipment() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_equipment("Valve", "T1")
        .with_mock_equipment("Pump", "T2")
        .build()
        .await?;

    let result = list_equipments(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<EquipmentDto> = read_json(resp).await;
    assert_eq!(body.len(), 2);

    Ok(())
}
