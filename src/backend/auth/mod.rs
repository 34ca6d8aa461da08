//! Authentication Module
//!
//! Registration, login, token handling and resolution of the acting user.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── sessions.rs     - Token issuance and verification
//! ├── resolver.rs     - Claim to current user record
//! ├── service.rs      - Registration and login
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password → password hashed → user stored
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Me**: token in `x-auth-token` → claim verified → user resolved and returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage and never returned
//! - Tokens are HS256 JWTs signed with the configured secret
//! - Unknown email and wrong password produce the same 401

/// Token issuance and verification
pub mod sessions;

/// Resolution of the acting user from a verified claim
pub mod resolver;

/// Registration and login
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserResponse};
pub use handlers::{login, me, register};
pub use resolver::{resolve, CurrentUser};
pub use service::UserService;
pub use sessions::{Claim, TokenError, TokenService};
