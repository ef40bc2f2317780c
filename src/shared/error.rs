//! Shared Error Types
//!
//! This module defines error types that are shared between the client and
//! the backend. They represent failure cases that can occur on either side
//! of the wire.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - Task field validation failures
//! - `UnknownEvent` - broadcast event name the receiver does not recognize
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across
//! thread boundaries.
use thiserror::Error;

/// Errors that can occur in both client and backend code
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Task field validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A broadcast event name this build does not know
    ///
    /// Surfaces on the client when the server is newer and emits event
    /// kinds the receiver predates. Receivers skip the event.
    #[error("Unknown broadcast event: {name}")]
    UnknownEvent {
        /// The unrecognized `event:` field value
        name: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an unknown-event error
    pub fn unknown_event(name: impl Into<String>) -> Self {
        Self::UnknownEvent { name: name.into() }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
