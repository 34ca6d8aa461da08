//! Backend Error Module
//!
//! This module defines the error type returned by every handler and entity
//! service. Each failure is mapped locally to one [`BackendError`] variant,
//! which renders itself as a JSON response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Status Mapping
//!
//! | Variant | Status |
//! |---|---|
//! | `Validation` | 401 |
//! | `Duplicate` | 401 |
//! | `Unauthenticated`, `InvalidCredentials` | 401 |
//! | `NotFound`, `UserNotFound` | 404 |
//! | `Internal` | 500 |

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
