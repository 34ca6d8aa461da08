/**
 * Server Configuration
 *
 * Loads the server settings from the environment and opens the database.
 *
 * # Configuration Sources
 *
 * | Variable         | Required | Default             |
 * |------------------|----------|---------------------|
 * | `PORT`           | no       | `9999`              |
 * | `DATABASE_URL`   | yes      |                     |
 * | `DATABASE_NAME`  | no       | name in the URL     |
 * | `JWT_SECRET_KEY` | yes      |                     |
 * | `TOKEN_TTL_SECS` | no       | ten years           |
 * | `BCRYPT_COST`    | no       | `10`                |
 *
 * # Error Handling
 *
 * Missing or unparsable values are reported as [`ConfigError`] and stop
 * startup; nothing silently falls back.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use thiserror::Error;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 9999;

/// Token lifetime used when `TOKEN_TTL_SECS` is not set
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

/// bcrypt cost used when `BCRYPT_COST` is not set
pub const DEFAULT_BCRYPT_COST: u32 = 10;

const MAX_DB_CONNECTIONS: u32 = 10;

/// Configuration failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub database_name: Option<String>,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let port = match get("PORT") {
            Some(raw) => parse("PORT", raw)?,
            None => DEFAULT_PORT,
        };

        let token_ttl = match get("TOKEN_TTL_SECS") {
            Some(raw) => Duration::from_secs(parse("TOKEN_TTL_SECS", raw)?),
            None => DEFAULT_TOKEN_TTL,
        };

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(raw) => {
                let cost: u32 = parse("BCRYPT_COST", raw.clone())?;
                if !(4..=31).contains(&cost) {
                    return Err(ConfigError::Invalid {
                        name: "BCRYPT_COST",
                        value: raw,
                        reason: "must be between 4 and 31".to_string(),
                    });
                }
                cost
            }
            None => DEFAULT_BCRYPT_COST,
        };

        Ok(Self {
            port,
            database_url: required("DATABASE_URL")?,
            database_name: get("DATABASE_NAME"),
            jwt_secret: required("JWT_SECRET_KEY")?,
            token_ttl,
            bcrypt_cost,
        })
    }
}

fn parse<T>(name: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
        value: raw,
    })
}

/// Open the connection pool and run migrations
///
/// This function:
/// 1. Parses `DATABASE_URL`, switching to `DATABASE_NAME` when given
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs the embedded migrations
///
/// Any failure is returned to the caller.
pub async fn load_database(config: &ServerConfig) -> Result<PgPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(&config.database_url)?;
    if let Some(name) = &config.database_name {
        options = options.database(name);
    }

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .connect_with(options)
        .await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
