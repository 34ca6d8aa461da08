//! Database integration tests
//!
//! Need a live Postgres at `DATABASE_URL`; run with `cargo test -- --ignored`.

mod postgres_store_test;
