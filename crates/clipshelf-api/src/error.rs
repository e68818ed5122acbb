//! HTTP error response conversion
//!
//! Handlers either return `Result<_, HttpAppError>` and let the default
//! status mapping apply, or build `(StatusCode, Json<ErrorResponse>)` tuples
//! directly where the boundary contract collapses statuses (upload, delete).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clipshelf_core::{AppError, LogLevel};
use clipshelf_storage::StorageError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON error body: a single human-readable message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Wrapper for AppError to implement IntoResponse. Needed because of orphan
/// rules: AppError lives in clipshelf-core.
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        HttpAppError(storage_app_error(err))
    }
}

/// Map storage failures onto the application taxonomy.
pub fn storage_app_error(err: StorageError) -> AppError {
    match err {
        StorageError::EmptyFile => AppError::InvalidInput("File is empty".to_string()),
        StorageError::InvalidFilename(name) => {
            AppError::InvalidInput(format!("Invalid filename: {}", name))
        }
        StorageError::NotFound(name) => AppError::NotFound(format!("File not found: {}", name)),
        StorageError::WriteFailed(msg)
        | StorageError::DeleteFailed(msg)
        | StorageError::Config(msg) => AppError::Storage(msg),
        StorageError::Io(e) => AppError::Storage(e.to_string()),
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorResponse::new(app_error.to_string()));
        (status, body).into_response()
    }
}
