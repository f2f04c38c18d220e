use axum::http::{header, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::*;
use crate::util::{get_request, json_request, multipart_request, read_bytes, read_json};

/// Expect a scanned tag to return the QR image URL and the fully resolved model
#[tokio::test]
async fn resolves_registered_equipment_with_qr_image() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/models",
            json!({
                "id": "Valve",
                "parts": [{
                    "id": "Handle",
                    "buttons": [{ "id": "b1", "imageFileName": "icon.png" }]
                }]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/ar/equipments",
            json!({ "name": "Valve", "tag": "T1" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(multipart_request(
            "/api/ar/equipments/T1/qr-image",
            "qr.png",
            b"\x89PNG",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(get_request("/api/ar/equipments/T1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(resp).await;
    assert_eq!(body["qr_image_url"], "/qrcodes/T1_qr.png");
    assert_eq!(body["model"]["id"], "Valve");
    assert_eq!(
        body["model"]["parts"][0]["buttons"][0]["imageUrl"],
        "/models/files/icon.png"
    );

    let resp = app
        .clone()
        .oneshot(get_request("/qrcodes/T1_qr.png"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(read_bytes(resp).await, b"\x89PNG".to_vec());

    Ok(())
}

/// Expect `name` to be accepted in place of `id` and the response to use `id`
#[tokio::test]
async fn accepts_name_alias_for_id() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/models",
            json!({ "name": "Actuator", "description": null }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .oneshot(get_request("/api/models/Actuator"))
        .await
        .unwrap();
    let body: serde_json::Value = read_json(resp).await;
    assert_eq!(body["id"], "Actuator");
    assert_eq!(body["description"], json!([]));

    Ok(())
}

/// Expect model names containing spaces to be reachable through the path
#[tokio::test]
async fn decodes_percent_encoded_names() -> Result<(), TestError> {
    let app = app().await?;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/models",
            json!({ "id": "Control Valve" }),
        ))
        .await
        .unwrap();

    let resp = app
        .oneshot(get_request("/api/models/Control%20Valve"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(get_request("/api/docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(resp).await;
    assert!(body["paths"]["/api/ar/equipments/{tag}"].is_object());

    Ok(())
}
