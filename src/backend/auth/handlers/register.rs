/**
 * Register Handler
 *
 * User registration for POST /users/register.
 *
 * # Registration Process
 *
 * 1. Validate username length, email format and password strength
 * 2. Reject an email that is already registered
 * 3. Hash the password and derive the avatar URL
 * 4. Store the user and return it
 *
 * Registration does not log the user in; clients call /users/login next.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::auth::service::UserService;
use crate::backend::error::BackendError;
use crate::backend::validation::Validate;

/// Register handler
///
/// # Errors
///
/// * `401 Unauthorized` - validation failure or email already registered
/// * `500 Internal Server Error` - hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /users/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@x.com",
///   "password": "Str0ng!Pass"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "msg": "Registration is Success",
///   "user": { "_id": "…", "username": "alice", "email": "alice@x.com", "imageUrl": "…" }
/// }
/// ```
pub async fn register(
    State(users): State<UserService>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Register request for username: {}, email: {}", request.username, request.email);

    request.validate()?;
    let user = users.register(request).await?;

    Ok(Json(RegisterResponse {
        msg: "Registration is Success".to_string(),
        user: user.into(),
    }))
}
