/**
 * Login Handler
 *
 * User authentication for POST /users/login.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::service::UserService;
use crate::backend::error::BackendError;
use crate::backend::validation::Validate;

/// Login handler
///
/// Verifies the email and password and returns a signed token together
/// with the user record.
///
/// # Errors
///
/// * `401 Unauthorized` - validation failure, unknown email or wrong password
/// * `500 Internal Server Error` - token signing or store failure
pub async fn login(
    State(users): State<UserService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Login request for email: {}", request.email);

    request.validate()?;
    let (token, user) = users.login(request).await?;

    Ok(Json(LoginResponse {
        msg: "Login is Success".to_string(),
        token,
        user: user.into(),
    }))
}
