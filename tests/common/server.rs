//! Test server helpers
//!
//! Builds the full application over an in-memory store, either wrapped
//! in an `axum_test::TestServer` for request-level integration tests or
//! served on a real local TCP port for end-to-end tests.

use std::path::PathBuf;

use axum_test::TestServer;

use taskboard::backend::server::config::ServerConfig;
use taskboard::backend::server::init::create_app_with_store;
use taskboard::backend::tasks::store::TaskStore;

/// Configuration for test servers: no CORS, a static dir that does not
/// exist (non-API paths just 404)
pub fn test_config() -> ServerConfig {
    ServerConfig {
        store_uri: "unused-in-tests".to_string(),
        listen_port: 0,
        allowed_origins: Vec::new(),
        static_asset_path: PathBuf::from("target/test-static-missing"),
    }
}

/// In-process test server over a fresh in-memory store
///
/// Returns the store handle alongside the server so tests can seed or
/// inspect state directly.
pub fn memory_test_server() -> (TestServer, TaskStore) {
    let store = TaskStore::memory();
    let app = create_app_with_store(store.clone(), &test_config());
    let server = TestServer::new(app).expect("Failed to build test server");
    (server, store)
}

/// Serve the application on a real local port
///
/// Binds port 0 and returns the base URL, the store handle, and the
/// serve task (aborted on drop by the caller or left to die with the
/// test runtime).
pub async fn spawn_test_server() -> (String, TaskStore, tokio::task::JoinHandle<()>) {
    let store = TaskStore::memory();
    let app = create_app_with_store(store.clone(), &test_config());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local addr");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server stopped unexpectedly");
    });

    (format!("http://{}", addr), store, handle)
}
