/**
 * Backend Error Types
 *
 * Every entity-service operation catches its own failures and maps them to
 * one of these variants; nothing escapes a handler unclassified.
 *
 * # Error Categories
 *
 * - Validation: malformed or missing input, one entry per failed field
 * - Duplicate: a unique email, mobile number or group name collided
 * - NotFound: missing record, or a record owned by someone else
 * - Unauthenticated: missing or invalid token, or bad login credentials
 * - Internal: anything unexpected (store, hashing, signing)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::FieldError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request body failed validation
    #[error("Validation failed for {} field(s)", .errors.len())]
    Validation {
        /// One entry per failed rule
        errors: Vec<FieldError>,
    },

    /// A uniqueness constraint was violated
    #[error("{message}")]
    Duplicate {
        /// The unique field that collided
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The record does not exist for this caller
    ///
    /// Records owned by other users report this too, so their existence
    /// is never revealed.
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The token claim refers to a user that is no longer stored
    #[error("No user found")]
    UserNotFound,

    /// No token, or a token that failed verification
    #[error("{message}")]
    Unauthenticated {
        /// Human-readable error message
        message: String,
    },

    /// Login email or password did not match
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Unexpected failure; the message is returned to the caller
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a validation error from the collected field failures
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    /// Create a validation error for a single field
    pub fn invalid_field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![FieldError::new(field, msg)],
        }
    }

    /// Create a duplicate error for a unique field
    ///
    /// # Example
    ///
    /// ```rust
    /// use contacts_api::backend::error::BackendError;
    ///
    /// let err = BackendError::duplicate("mobile");
    /// assert_eq!(err.message(), "Contact already exists with this mobile number");
    /// ```
    pub fn duplicate(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = match field.as_str() {
            "email" => "User already exists".to_string(),
            "mobile" => "Contact already exists with this mobile number".to_string(),
            "name" => "Group already exists".to_string(),
            other => format!("A record with this {other} already exists"),
        };
        Self::Duplicate { field, message }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an unauthenticated error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// Validation and duplicate failures use 401, matching the API's
    /// established contract with its clients.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNAUTHORIZED,
            Self::Duplicate { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Unauthenticated { .. } | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::Duplicate { message, .. }
            | Self::NotFound { message }
            | Self::Unauthenticated { message }
            | Self::Internal { message } => message.clone(),
            other => other.to_string(),
        }
    }
}
