//! Error Types
//!
//! Error kinds for each layer, with a deterministic HTTP status code mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store could not be reached (pool exhausted, closed, or I/O failure)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Unavailable(err.to_string())
            }
            other => Self::Database(other),
        }
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Repository(RepositoryError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Repository(RepositoryError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(RepositoryError::Unavailable(_)) => "STORE_UNAVAILABLE",
            Self::Repository(RepositoryError::Database(_)) => "STORE_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid contact id: {0}")]
    InvalidId(String),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),
}

impl ApiError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UseCase(uc_error) => uc_error.status_code(),
            Self::BadRequest(_) | Self::InvalidId(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UseCase(uc_error) => uc_error.error_code(),
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::InvalidId(_) => "INVALID_ID",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().to_string();

        if status.is_server_error() {
            tracing::error!(code = %code, error = %self, "Request failed");
        } else {
            tracing::debug!(code = %code, error = %self, "Request rejected");
        }

        let message = self.to_string();
        let details = match self {
            ApiError::Validation(errors) => Some(errors),
            _ => None,
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<uuid::Error> for ApiError {
    fn from(err: uuid::Error) -> Self {
        ApiError::InvalidId(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map_or_else(|| "invalid".to_string(), ToString::to_string),
                })
            })
            .collect();
        details.sort_by(|a, b| a.field.cmp(&b.field));
        ApiError::Validation(details)
    }
}
