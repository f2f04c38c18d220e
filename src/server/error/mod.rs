//! Error types for the MXLab server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (configuration, model hierarchies, equipment tags, uploads, blob storage). All
//! errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic
//! error definitions with automatic `Display` and `Error` trait implementations.

pub mod ar_model;
pub mod config;
pub mod equipment;
pub mod storage;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        ar_model::ArModelError, config::ConfigError, equipment::EquipmentError,
        storage::StorageError, upload::UploadError,
    },
};

/// Main error type for the MXLab server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Model errors (conflicts, missing models, malformed payloads, corrupt stored records)
/// - Equipment errors (conflicts, missing equipment, orphaned model references)
/// - Upload errors (missing multipart fields, unusable filenames)
/// - Storage errors (missing blobs, invalid keys, filesystem failures)
/// - External library errors (database)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Model hierarchy error (conflict, not found, malformed payload, corrupt record).
    #[error(transparent)]
    ArModelError(#[from] ArModelError),
    /// Equipment directory error (conflict, not found, orphaned model reference).
    #[error(transparent)]
    EquipmentError(#[from] EquipmentError),
    /// Upload error (missing file field, filename sanitized to nothing).
    #[error(transparent)]
    UploadError(#[from] UploadError),
    /// Blob storage error (missing object, invalid key, IO failure).
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Database and internal errors are treated as internal server errors (500) with logging.
///
/// # Returns
/// - 400 Bad Request - For malformed payloads, missing upload fields, invalid storage keys
/// - 404 Not Found - For missing models, equipment, or stored files
/// - 409 Conflict - For duplicate model names or equipment tags
/// - 500 Internal Server Error - For corrupt records and all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ArModelError(err) => err.into_response(),
            Self::EquipmentError(err) => err.into_response(),
            Self::UploadError(err) => err.into_response(),
            Self::StorageError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status code and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Returns true when a database error was caused by a unique constraint violation.
///
/// Concurrent creates of the same model name or equipment tag both pass the existence
/// check; the store rejects the second insert and this maps it back to a conflict.
pub(crate) fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}
