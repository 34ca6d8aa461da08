//! Route Configuration Module
//!
//! HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! └── router.rs       - Router assembly, auth gate and layers
//! ```

pub mod router;

pub use router::create_router;
