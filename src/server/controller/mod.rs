//! HTTP controller endpoints for the MXLab web API.
//!
//! Controllers are thin Axum handlers: they extract path, query, JSON and multipart
//! inputs, call into the service layer and wrap the result in a status code. All
//! endpoints are documented with utoipa for the Swagger UI.

pub mod ar_model;
pub mod asset;
pub mod equipment;
pub mod util;
