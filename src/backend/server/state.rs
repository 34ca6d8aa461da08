/**
 * Application State Management
 *
 * The state shared by every handler: the store, the token service and the
 * three entity services built on top of them.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the service they
 * need (`State<ContactService>`, `State<TokenService>`, ...) instead of
 * the whole `AppState`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::UserService;
use crate::backend::auth::sessions::TokenService;
use crate::backend::contacts::service::ContactService;
use crate::backend::groups::service::GroupService;
use crate::backend::store::Store;

/// Application state
///
/// Cheap to clone: every field is an `Arc` or holds only `Arc`s and keys.
#[derive(Clone)]
pub struct AppState {
    /// Backing store for users, contacts and groups
    pub store: Arc<dyn Store>,
    /// Token issuance and verification
    pub tokens: TokenService,
    /// Registration and login
    pub users: UserService,
    /// Owner-scoped contacts
    pub contacts: ContactService,
    /// Global groups
    pub groups: GroupService,
}

impl AppState {
    /// Wire the services over one store
    pub fn new(store: Arc<dyn Store>, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            users: UserService::new(store.clone(), tokens.clone(), bcrypt_cost),
            contacts: ContactService::new(store.clone()),
            groups: GroupService::new(store.clone()),
            store,
            tokens,
        }
    }
}

impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for UserService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for ContactService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.contacts.clone()
    }
}

impl FromRef<AppState> for GroupService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.groups.clone()
    }
}
