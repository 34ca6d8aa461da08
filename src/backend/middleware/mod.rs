//! Middleware Module
//!
//! HTTP middleware that runs before handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - Token gate for protected routes, plus the [`AuthUser`]
//!   extractor that hands the verified claim to handlers

pub mod auth;

pub use auth::{auth_middleware, extract_token, AuthUser, AUTH_TOKEN_HEADER};
