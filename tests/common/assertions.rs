//! Custom assertion macros and utilities
//!
//! Provides enhanced assertion macros for better test output and
//! more descriptive error messages.

/// Assert that a response carries the given status and `msg` body
#[macro_export]
macro_rules! assert_error_msg {
    ($response:expr, $status:expr, $msg:expr) => {{
        let response = $response;
        assert_eq!(response.status_code(), $status);
        let body: serde_json::Value = response.json();
        assert_eq!(body["msg"], $msg, "unexpected error body: {}", body);
        assert_eq!(body["status"], $status.as_u16());
    }};
}

/// Assert that a response is a validation failure naming these fields
#[macro_export]
macro_rules! assert_validation_fields {
    ($response:expr, [$($field:expr),+ $(,)?]) => {{
        let response = $response;
        assert_eq!(response.status_code(), axum::http::StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        let fields: Vec<&str> = body["errors"]
            .as_array()
            .expect("validation body should list errors")
            .iter()
            .map(|e| e["field"].as_str().unwrap_or_default())
            .collect();
        pretty_assertions::assert_eq!(fields, vec![$($field),+]);
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
