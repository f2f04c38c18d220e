use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Multipart body is missing the \"file\" field")]
    MissingFile,
    #[error("Uploaded file has no filename")]
    MissingFileName,
    /// Sanitizing the original filename left nothing usable as a storage key.
    #[error("Filename {0:?} contains no usable characters")]
    EmptyFileName(String),
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
