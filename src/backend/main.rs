/**
 * Task Board Server Entry Point
 *
 * Starts the Axum HTTP server: load environment, initialize tracing,
 * read the explicit startup configuration, connect the store, serve.
 * A missing store connection string or a failed store connection halts
 * the process before the listener binds.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("Server initialization started");

    let config = match taskboard::backend::server::config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("FATAL: {}", e);
            std::process::exit(1);
        }
    };

    let app = taskboard::backend::server::init::create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.listen_port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
