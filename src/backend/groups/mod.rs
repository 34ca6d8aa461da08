//! Groups Module
//!
//! Global, unowned labels for organising contacts. Group routes are
//! public; no token is needed to create or read them.

pub mod handlers;
pub mod service;

pub use handlers::{create_group, get_group, list_groups};
pub use service::GroupService;
