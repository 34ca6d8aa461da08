//! Backend Module
//!
//! All server-side code for the contacts API: an Axum HTTP server over a
//! Postgres store, with token-based authentication.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly and the auth gate
//! - **`auth`** - Tokens, registration, login and the acting-user resolver
//! - **`middleware`** - Token extraction and verification per request
//! - **`contacts`** - Owner-scoped contact CRUD
//! - **`groups`** - Global group create/list/get
//! - **`store`** - Persistence ports with Postgres and in-memory adapters
//! - **`validation`** - Request body rules
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── contacts/       - Contacts service and handlers
//! ├── groups/         - Groups service and handlers
//! ├── store/          - Store traits and adapters
//! ├── validation.rs   - Validation rules
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. `TraceLayer` opens a span for the request
//! 2. On protected routes, `auth_middleware` verifies the token and stores
//!    the claim in request extensions
//! 3. The handler extracts its service from `AppState`, validates the body,
//!    and resolves the acting user when it needs one
//! 4. The service talks to the store; failures become `BackendError`,
//!    which renders the JSON error body and status code

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Contacts owned by users
pub mod contacts;

/// Global contact groups
pub mod groups;

/// Persistence
pub mod store;

/// Request validation
pub mod validation;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};
