//! Error handling - every failure becomes a `{ "message": ... }` body.

use std::fmt;

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};

use folio_core::domain::SchemaViolation;
use folio_core::error::RepoError;
use folio_shared::ErrorResponse;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Rejected input; the message is shown to the user as-is.
    BadRequest(String),
    NotFound,
    /// Store or server fault; the detail is logged, never returned.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound => write!(f, "Not found"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::NotFound => ErrorResponse::not_found(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<SchemaViolation> for AppError {
    fn from(violation: SchemaViolation) -> Self {
        tracing::debug!(field = violation.field, "Rejected payload: {}", violation.message);
        AppError::BadRequest(violation.message)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Constraint(msg) => {
                tracing::error!("Database constraint violation: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// `JsonConfig` error handler: malformed, mistyped or incomplete bodies are
/// client errors carrying the deserializer's message.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match err {
        JsonPayloadError::Deserialize(inner) => inner.to_string(),
        other => other.to_string(),
    };
    AppError::BadRequest(message).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
