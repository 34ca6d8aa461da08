//! Shared Module
//!
//! Entity and request types used by both the HTTP layer and the stores.
//! Everything here serialises to the camelCase JSON shape the API exposes,
//! with the record identifier written as `_id`.

/// User record and registration input
pub mod user;

/// Contact record and its attribute set
pub mod contact;

/// Group record and creation input
pub mod group;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use user::{NewUser, User};
pub use contact::{Contact, ContactRequest};
pub use group::{Group, GroupRequest};
pub use error::FieldError;
