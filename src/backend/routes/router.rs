/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Task API routes (`/api/tasks`, `/api/events`)
 * 2. CORS layer, when the configuration names allowed origins
 * 3. Static asset fallback: every non-API path is served from the
 *    client bundle directory, with `index.html` as the not-found
 *    fallback so client-side routing works in production
 */
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::backend::routes::task_routes::configure_task_routes;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - store, broadcast publisher, and session registry
/// * `config` - allowed origins and static asset directory
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router {
    let router = configure_task_routes(Router::new());
    let mut router = router.with_state(app_state);

    if let Some(cors) = cors_layer(&config.allowed_origins) {
        tracing::info!(
            "CORS enabled for origins: {:?}",
            config.allowed_origins
        );
        router = router.layer(cors);
    }

    // Serve the built client bundle for every non-API path; unknown
    // paths fall through to index.html for the client router.
    let index = config.static_asset_path.join("index.html");
    let static_files =
        ServeDir::new(&config.static_asset_path).not_found_service(ServeFile::new(index));

    router.fallback_service(static_files)
}

/// Build the CORS layer from the configured origins
///
/// Returns `None` when no valid origin is configured, in which case the
/// layer is omitted entirely (same-origin production deployments).
fn cors_layer(allowed_origins: &[String]) -> Option<CorsLayer> {
    if allowed_origins.is_empty() {
        return None;
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
