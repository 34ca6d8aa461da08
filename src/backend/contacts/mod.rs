//! Contacts Module
//!
//! Address-book entries owned by the signed-in user. Every route here sits
//! behind the auth middleware, and every read or write is scoped to the
//! acting user: another user's contact is reported as not found.
//!
//! # Module Structure
//!
//! ```text
//! contacts/
//! ├── mod.rs      - Module exports and documentation
//! ├── service.rs  - Owner-scoped CRUD
//! └── handlers.rs - HTTP handlers
//! ```

pub mod handlers;
pub mod service;

pub use handlers::{create_contact, delete_contact, get_contact, list_contacts, update_contact};
pub use service::ContactService;
