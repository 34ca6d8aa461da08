//! API integration tests
//!
//! Integration tests for all API endpoints

mod contacts_test;
mod users_test;
