//! User Error Types
//!
//! This module provides user-resource error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::FieldErrors;
use thiserror::Error;

use crate::domain::value_object::user_id::UserId;

/// User-specific result type alias
pub type UserResult<T> = Result<T, UserError>;

/// User-specific error variants
#[derive(Debug, Error)]
pub enum UserError {
    /// Payload failed schema validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// No user with this id
    #[error("User {0} not found")]
    UserNotFound(UserId),

    /// Path segment is not an integer id; no such resource exists
    #[error("User '{0}' not found")]
    MalformedUserId(String),

    /// Username or email already belongs to another user
    #[error("Username or email already in use")]
    DuplicateUser,

    /// Request body is not declared as JSON
    #[error("Expected request with `Content-Type: application/json`")]
    UnsupportedMediaType,

    /// Request body exceeds the extractor's size limit
    #[error("Request body is too large")]
    PayloadTooLarge,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UserError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::Validation(_) => StatusCode::BAD_REQUEST,
            UserError::UserNotFound(_) | UserError::MalformedUserId(_) => StatusCode::NOT_FOUND,
            UserError::DuplicateUser => StatusCode::CONFLICT,
            UserError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            UserError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            UserError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    ///
    /// Database errors are nominally 500; the response refines them through
    /// the kernel conversion (pool exhaustion and outages become 503).
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::Validation(_) => ErrorKind::BadRequest,
            UserError::UserNotFound(_) | UserError::MalformedUserId(_) => ErrorKind::NotFound,
            UserError::DuplicateUser => ErrorKind::Conflict,
            UserError::UnsupportedMediaType => ErrorKind::UnsupportedMediaType,
            UserError::PayloadTooLarge => ErrorKind::PayloadTooLarge,
            UserError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Classify a write failure, surfacing unique violations as [`UserError::DuplicateUser`]
    pub fn from_write(err: sqlx::Error) -> Self {
        let is_unique_violation = err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());

        if is_unique_violation {
            UserError::DuplicateUser
        } else {
            UserError::Database(err)
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UserError::Database(e) => {
                tracing::error!(error = %e, "User database error");
            }
            UserError::Validation(errors) => {
                tracing::debug!(fields = %errors, "User payload rejected");
            }
            _ => {
                tracing::debug!(error = %self, "User error");
            }
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            // Let the kernel classify outages and constraint violations
            UserError::Database(e) => AppError::from(e),
            UserError::DuplicateUser => AppError::conflict("Username or email already in use")
                .with_action("Choose a different username or email"),
            UserError::UnsupportedMediaType => AppError::unsupported_media_type(
                "Expected request with `Content-Type: application/json`",
            )
            .with_action("Send the body as JSON"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Validation failures keep their field map: `{"errors": {field: [msg]}}`
            UserError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "errors": errors })),
            )
                .into_response(),
            other => AppError::from(other).into_response(),
        }
    }
}
