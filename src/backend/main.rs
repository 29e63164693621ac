/**
 * Property Market Server Entry Point
 *
 * This is the main entry point for the property market backend server.
 * It loads configuration, opens the database and serves the Axum app.
 */

use std::net::SocketAddr;

use property_market::backend::server::{config::load_config, create_app};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing; RUST_LOG overrides the default level
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("Server initialization started");

    let config = load_config()?;
    let port = config.port;

    // Create the Axum app
    let app = create_app(config).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("API index at http://127.0.0.1:{}/api", port);
    axum::serve(listener, app).await?;

    Ok(())
}
