//! Contacts API - Main Library
//!
//! A backend for a personal contacts manager. Users register and log in,
//! receive a signed bearer token, and manage their own address book.
//! Contacts can be tagged with globally shared groups.
//!
//! # Module Structure
//!
//! - **`shared`** - Entity and request types, serialised as camelCase JSON
//!   - `User`, `Contact`, `Group` records and their inputs
//!   - `FieldError` for validation responses
//!
//! - **`backend`** - The Axum server
//!   - Token service, access gate and auth resolver
//!   - Contacts, groups and users services
//!   - Postgres store (sqlx) with an in-memory store for tests
//!
//! # Usage
//!
//! ```rust,no_run
//! use contacts_api::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - **`test-support`** - exposes `backend::store::MemoryStore` to
//!   integration tests and downstream crates

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
