//! Authentication Handlers Module
//!
//! HTTP handlers for the user endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /users/register - User registration
//! - **`login`** - POST /users/login - User authentication
//! - **`me`** - GET /users/me - Current user info (protected)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use types::{LoginRequest, LoginResponse, MeResponse, RegisterRequest, RegisterResponse, UserResponse};

pub use login::login;
pub use me::me;
pub use register::register;
