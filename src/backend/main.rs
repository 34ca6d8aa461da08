/**
 * Contacts Server Entry Point
 *
 * Loads `.env`, initializes tracing, reads the configuration and serves
 * the API on `0.0.0.0:$PORT`.
 */

use contacts_api::backend::server::{create_app, ServerConfig, StartupError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ServerConfig::from_env().inspect_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
    })?;

    let app = create_app(&config).await.inspect_err(|e| {
        tracing::error!("Server initialization failed: {}", e);
    })?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is Started on port {}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
