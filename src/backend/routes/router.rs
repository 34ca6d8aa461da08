/**
 * Router Configuration
 *
 * Assembles every route into a single Axum router.
 *
 * # Route Groups
 *
 * 1. Public routes: welcome, register, login, groups
 * 2. Protected routes: current user and contacts, behind the auth gate
 * 3. Fallback handler: JSON 404 for unknown paths
 *
 * The auth gate is attached with `route_layer`, so it only runs for
 * requests that matched a protected route; unknown paths still get a 404
 * rather than a 401.
 */

use axum::{
    middleware::from_fn_with_state,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::auth::handlers::{login, me, register};
use crate::backend::contacts::handlers::{
    create_contact, delete_contact, get_contact, list_contacts, update_contact,
};
use crate::backend::error::BackendError;
use crate::backend::groups::handlers::{create_group, get_group, list_groups};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// ## Public
///
/// - `GET /` - Welcome message
/// - `POST /users/register` - User registration
/// - `POST /users/login` - User login
/// - `POST /groups`, `GET /groups` - Create and list groups
/// - `GET /groups/{group_id}` - Get one group
///
/// ## Protected (`x-auth-token` required)
///
/// - `GET /users/me` - Current user
/// - `POST /contacts`, `GET /contacts` - Create and list own contacts
/// - `GET|PUT|DELETE /contacts/{contact_id}` - Read, replace, delete one contact
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = Router::new()
        .route("/users/me", get(me))
        .route("/contacts", post(create_contact).get(list_contacts))
        .route(
            "/contacts/{contact_id}",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    let public = Router::new()
        .route("/", get(welcome))
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/groups", post(create_group).get(list_groups))
        .route("/groups/{group_id}", get(get_group));

    public
        .merge(protected)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn welcome() -> Json<Value> {
    Json(json!({ "msg": "Welcome to the Contacts API" }))
}

async fn fallback() -> BackendError {
    BackendError::not_found("Route not found")
}
