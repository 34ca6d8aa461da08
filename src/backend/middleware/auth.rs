/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in user. The token is read from
 * the `x-auth-token` header (or `Authorization: Bearer <token>`), verified
 * by the [`TokenService`], and the resulting [`Claim`] is attached to the
 * request extensions for handlers to pick up.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{Claim, TokenService};
use crate::backend::error::BackendError;

/// Header that carries the bearer token
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Pull the token out of the request headers
///
/// `x-auth-token` wins; `Authorization: Bearer <token>` is the fallback.
/// Empty values count as absent.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let from_custom = headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty());

    from_custom.or_else(|| {
        headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
    })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the request headers
/// 2. Verifies it with the token service
/// 3. Attaches the claim to request extensions for use in handlers
///
/// Returns 401 with "No token provided" if no token is present, or
/// "Invalid token provided" if verification fails.
pub async fn auth_middleware(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = extract_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing auth token on {}", request.uri().path());
        BackendError::unauthenticated("No token provided")
    })?;

    let claim = tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::from(e)
    })?;

    request.extensions_mut().insert(claim);
    Ok(next.run(request).await)
}

/// Axum extractor for the verified claim
///
/// Rejects with 401 when the auth middleware did not run on the route.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claim);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claim>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("Claim not found in request extensions");
                BackendError::unauthenticated("No token provided")
            })
    }
}
