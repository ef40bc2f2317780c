/**
 * Backend Error Types
 *
 * This module defines the error taxonomy for the task API. Every handler
 * failure maps onto one of three classes:
 *
 * - validation failure (missing/empty field, oversized title) -> 400
 * - no record with the requested id -> 404
 * - store connection/query failure -> 500
 *
 * All errors are terminal per-request; the server never retries.
 */
use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Errors returned by task API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request input failed validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// No task with the requested id exists
    #[error("Task not found")]
    NotFound,

    /// The task store failed (connection or query error)
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(shared) => match shared {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::UnknownEvent { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message for the response body
    pub fn message(&self) -> String {
        match self {
            Self::Validation(shared) => shared.to_string(),
            Self::NotFound => "Task not found".to_string(),
            Self::Store(err) => format!("Error accessing task store: {}", err),
        }
    }
}
