//! Integration tests
//!
//! - `api` - every route through the full router and in-memory store
//! - `database` - the Postgres store against a live database (ignored)

pub mod api;
pub mod database;
