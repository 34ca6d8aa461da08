/**
 * Get Current User Handler
 *
 * GET /users/me returns the record of the user the token belongs to.
 * Requires the auth middleware on the route.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MeResponse;
use crate::backend::auth::resolver::CurrentUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid token (rejected by the middleware)
/// * `404 Not Found` - the token's user no longer exists
pub async fn me(CurrentUser(user): CurrentUser) -> Json<MeResponse> {
    tracing::debug!("Get current user: {}", user.id);
    Json(MeResponse { user: user.into() })
}
