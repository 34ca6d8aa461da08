//! Test suite for the contacts API
//!
//! This module organizes all tests. Everything except the Postgres tests
//! runs against the in-memory store; the Postgres tests are `#[ignore]`d
//! and need `DATABASE_URL` (run them with `--ignored`).

pub mod integration;
