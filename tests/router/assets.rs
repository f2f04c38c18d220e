use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use super::*;
use crate::util::{get_request, json_request, multipart_request, read_bytes, read_json};

/// Expect an uploaded model file to be attached to the named model and served back
#[tokio::test]
async fn uploads_model_file_for_existing_model() -> Result<(), TestError> {
    let app = app().await?;

    app.clone()
        .oneshot(json_request("POST", "/api/models", json!({ "id": "Valve" })))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(multipart_request(
            "/api/upload/model?name=Valve",
            "Valve Body.glb",
            b"glTF",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(resp).await;
    assert_eq!(body["filename"], "Valve_Body.glb");
    assert_eq!(body["model_updated"], true);

    let resp = app
        .clone()
        .oneshot(get_request("/api/models/Valve"))
        .await
        .unwrap();
    let model: serde_json::Value = read_json(resp).await;
    assert_eq!(model["modelFileUrl"], "/models/files/Valve_Body.glb");

    let resp = app
        .oneshot(get_request("/models/files/Valve_Body.glb"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "model/gltf-binary");
    assert_eq!(read_bytes(resp).await, b"glTF".to_vec());

    Ok(())
}

/// Expect an uploaded asset URL to be usable as a button image
#[tokio::test]
async fn uploads_asset() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .clone()
        .oneshot(multipart_request("/api/upload/asset", "icon.png", b"png"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(resp).await;
    assert_eq!(body["url"], "/models/files/icon.png");

    let resp = app
        .oneshot(get_request("/models/files/icon.png"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 Bad Request when the multipart body has no `file` field
#[tokio::test]
async fn bad_request_without_file_field() -> Result<(), TestError> {
    let app = app().await?;

    let body = "--b\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--b--\r\n";
    let request = Request::builder()
        .method("POST")
        .uri("/api/upload/asset")
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=b")
        .body(Body::from(body))
        .unwrap();

    let resp = app.oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 Bad Request when the filename sanitizes to nothing
#[tokio::test]
async fn bad_request_for_unusable_filename() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(multipart_request("/api/upload/asset", "###", b"png"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found for a file that was never uploaded
#[tokio::test]
async fn not_found_for_missing_file() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(get_request("/models/files/missing.png"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
