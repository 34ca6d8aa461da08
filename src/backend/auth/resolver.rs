/**
 * Auth Resolver
 *
 * Turns a verified claim into the full, current user record. Protected
 * handlers that need more than the claim (ownership scoping, the profile
 * itself) take a [`CurrentUser`] argument.
 */

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::backend::auth::sessions::Claim;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::UserStore;
use crate::shared::User;

/// Load the user a claim refers to
///
/// A claim for a user that is no longer stored fails with
/// `BackendError::UserNotFound` (404).
pub async fn resolve<S>(store: &S, claim: &Claim) -> Result<User, BackendError>
where
    S: UserStore + ?Sized,
{
    store
        .find_user_by_id(claim.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found for token claim: {}", claim.user_id);
            BackendError::UserNotFound
        })
}

/// Axum extractor for the acting user's full record
///
/// Requires the auth middleware to have run on the route.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(claim) = AuthUser::from_request_parts(parts, state).await?;
        let user = resolve(state.store.as_ref(), &claim).await?;
        Ok(CurrentUser(user))
    }
}
