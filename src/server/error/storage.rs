use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Object {namespace}/{key} not found")]
    NotFound { namespace: String, key: String },
    #[error("Invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("Unknown storage namespace {0:?}")]
    UnknownNamespace(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { .. } => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "File not found")
            }
            Self::InvalidKey(_) => error_response(StatusCode::BAD_REQUEST, self.to_string()),
            err => InternalServerError(err).into_response(),
        }
    }
}
