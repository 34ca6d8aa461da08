/**
 * Server Initialization
 *
 * Builds the application from a [`ServerConfig`]:
 * 1. Open the database and run migrations
 * 2. Create the token service
 * 3. Wire the state and the router
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::{PgStore, Store};

/// Failures that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] crate::backend::server::config::ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the application state over any store
pub fn build_state(store: Arc<dyn Store>, config: &ServerConfig) -> AppState {
    let tokens = TokenService::new(&config.jwt_secret, config.token_ttl);
    AppState::new(store, tokens, config.bcrypt_cost)
}

/// Create and configure the Axum application backed by Postgres
pub async fn create_app(config: &ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing contacts backend server");

    let pool = load_database(config).await?;
    let state = build_state(Arc::new(PgStore::new(pool)), config);

    let app = create_router(state);
    tracing::info!("Router configured");
    Ok(app)
}
