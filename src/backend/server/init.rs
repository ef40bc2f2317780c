/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: store connection, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to the task store and run migrations (connection failure
 *    is fatal; the listener never binds without a working store)
 * 2. Create the broadcast publisher and session registry
 * 3. Assemble the router (API routes, CORS, static assets)
 */
use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::tasks::store::TaskStore;

/// Create and configure the Axum application
///
/// Connects to the task store named by the configuration, then builds
/// the full router around it.
///
/// # Errors
///
/// Returns the store connection error; startup must not proceed
/// without persistence.
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing task board server");

    let pool = config.connect_store().await?;
    let store = TaskStore::postgres(pool);

    Ok(create_app_with_store(store, config))
}

/// Assemble the application around an existing store
///
/// The seam used by the test suite to run the full HTTP surface over an
/// in-memory store.
pub fn create_app_with_store(store: TaskStore, config: &ServerConfig) -> Router {
    let app_state = AppState::new(store);
    tracing::info!("Application state and broadcast channel initialized");

    create_router(app_state, config)
}
