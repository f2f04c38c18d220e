use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum EquipmentError {
    #[error("AR equipment with tag {0:?} not found")]
    NotFound(String),
    #[error("AR equipment with tag {0:?} already exists")]
    AlreadyExists(String),
    /// The equipment exists but the model it references does not.
    #[error("AR equipment {tag:?} references model {name:?} which does not exist")]
    ModelNotFound { tag: String, name: String },
    #[error("Invalid equipment payload: {0}")]
    InvalidPayload(String),
}

impl IntoResponse for EquipmentError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "AR equipment not found")
            }
            Self::ModelNotFound { .. } => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "Model not found")
            }
            Self::AlreadyExists(_) => error_response(StatusCode::CONFLICT, self.to_string()),
            Self::InvalidPayload(_) => error_response(StatusCode::BAD_REQUEST, self.to_string()),
        }
    }
}
