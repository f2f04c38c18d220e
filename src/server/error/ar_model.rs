use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum ArModelError {
    #[error("Model {0:?} not found")]
    NotFound(String),
    #[error("Model {0:?} already exists")]
    AlreadyExists(String),
    /// The submitted hierarchy failed structural validation.
    #[error("Invalid model payload: {0}")]
    InvalidPayload(String),
    /// A stored JSON column could not be decoded; the record is not repaired.
    #[error("Stored model {name:?} has a corrupt {column} column: {reason}")]
    CorruptRecord {
        name: String,
        column: &'static str,
        reason: String,
    },
}

impl IntoResponse for ArModelError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "Model not found")
            }
            Self::AlreadyExists(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::CONFLICT, self.to_string())
            }
            Self::InvalidPayload(_) => error_response(StatusCode::BAD_REQUEST, self.to_string()),
            Self::CorruptRecord { .. } => InternalServerError(self).into_response(),
        }
    }
}
