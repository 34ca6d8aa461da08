//! Shared Error Types
//!
//! Field-level validation failures. A rejected request carries one
//! [`FieldError`] per rule it broke, serialised as `{ "field", "msg" }`.
//!
//! # Usage
//!
//! ```rust
//! use contacts_api::shared::error::FieldError;
//!
//! let error = FieldError::new("email", "Proper Email is Required");
//! assert_eq!(error.field, "email");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single validation failure tied to a request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub msg: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            msg: msg.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.msg)
    }
}
