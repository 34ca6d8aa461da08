/**
 * Error Conversion
 *
 * `IntoResponse` for [`BackendError`], plus the `From` impls that fold
 * store, token and extractor failures into it.
 *
 * # Response Format
 *
 * ```json
 * { "msg": "The Contact is not found", "status": 404 }
 * { "errors": [{ "field": "name", "msg": "Name is Required" }], "status": 401 }
 * { "errors": ["connection refused"], "status": 500 }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::backend::auth::sessions::TokenError;
use crate::backend::error::types::BackendError;
use crate::backend::store::StoreError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            BackendError::Validation { errors } => json!({
                "errors": errors,
                "status": status.as_u16(),
            }),
            BackendError::Internal { message } => json!({
                "errors": [message],
                "status": status.as_u16(),
            }),
            other => json!({
                "msg": other.message(),
                "status": status.as_u16(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { field } => BackendError::duplicate(field),
            StoreError::Backend { message } => {
                tracing::error!("Store error: {}", message);
                BackendError::internal(message)
            }
        }
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidToken(_) => BackendError::unauthenticated("Invalid token provided"),
            TokenError::IssuanceFailed(reason) => {
                tracing::error!("Failed to issue token: {}", reason);
                BackendError::internal("Unable to generate the token")
            }
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        BackendError::invalid_field("body", rejection.body_text())
    }
}
