/**
 * Server Configuration
 *
 * Explicit configuration object passed at startup, replacing ambient
 * dev/prod environment switching. Everything the server needs is
 * enumerated here: the store connection string, the listen port, the
 * allowed CORS origins, and the static asset directory.
 *
 * # Configuration Sources
 *
 * `from_env` reads environment variables (after optional `.env` loading
 * in main), with development defaults for everything except the store
 * URI.
 *
 * # Fail-fast
 *
 * A missing store connection string is fatal: the process must not come
 * up without a place to persist tasks. This mirrors the startup check
 * the system has always had, and it is deliberately not recoverable.
 */
use std::path::PathBuf;
use sqlx::PgPool;
use thiserror::Error;

/// Default listen port for local development
const DEFAULT_PORT: u16 = 8081;

/// Default static asset directory (the built client bundle)
const DEFAULT_STATIC_DIR: &str = "client/build";

/// Configuration errors, all fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("store connection string missing: set TASKBOARD_STORE_URI (or DATABASE_URL)")]
    MissingStoreUri,

    #[error("invalid TASKBOARD_PORT value: {0}")]
    InvalidPort(String),
}

/// Everything the server process is configured with
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Connection string for the task store
    pub store_uri: String,
    /// TCP port the HTTP server binds
    pub listen_port: u16,
    /// Origins allowed by CORS; empty disables the CORS layer entirely
    /// (production serves client and API from the same origin)
    pub allowed_origins: Vec<String>,
    /// Directory holding the built client bundle, served for all
    /// non-API paths
    pub static_asset_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// | Variable | Meaning | Default |
    /// |---|---|---|
    /// | `TASKBOARD_STORE_URI` / `DATABASE_URL` | store connection string | required |
    /// | `TASKBOARD_PORT` | listen port | 8081 |
    /// | `TASKBOARD_ALLOWED_ORIGINS` | comma-separated CORS origins | none |
    /// | `TASKBOARD_STATIC_DIR` | client bundle directory | `client/build` |
    ///
    /// # Errors
    ///
    /// * `MissingStoreUri` when neither store variable is set
    /// * `InvalidPort` when `TASKBOARD_PORT` is not a valid u16
    pub fn from_env() -> Result<Self, ConfigError> {
        let store_uri = std::env::var("TASKBOARD_STORE_URI")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .map_err(|_| ConfigError::MissingStoreUri)?;

        let listen_port = match std::env::var("TASKBOARD_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let allowed_origins = std::env::var("TASKBOARD_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let static_asset_path = std::env::var("TASKBOARD_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            store_uri,
            listen_port,
            allowed_origins,
            static_asset_path,
        })
    }

    /// Connect to the task store and run pending migrations
    ///
    /// Connection failure is fatal to startup (the caller propagates it
    /// and exits). Migration failure only warns: the schema may already
    /// be in place from a previous run.
    pub async fn connect_store(&self) -> Result<PgPool, sqlx::Error> {
        tracing::info!("Connecting to task store...");
        let pool = PgPool::connect(&self.store_uri).await?;
        tracing::info!("Task store connection pool created");

        match sqlx::migrate!("./migrations").run(&pool).await {
            Ok(_) => tracing::info!("Store migrations completed"),
            Err(e) => {
                tracing::warn!("Store migrations failed (schema may already exist): {:?}", e);
            }
        }

        Ok(pool)
    }
}
