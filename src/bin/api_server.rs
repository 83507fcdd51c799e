// API Server Binary Entry Point
//
// Purpose: Start the Axum API server for the Q&A service
// Usage: cargo run --features api --bin api_server

use samarth_qa::{create_router, AppState};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "samarth_qa=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let host: IpAddr = std::env::var("HOST")
        .ok()
        .and_then(|h| h.parse().ok())
        .unwrap_or_else(|| IpAddr::from([0, 0, 0, 0]));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    // Unset: built-in dataset
    let dataset_path = std::env::var("DATASET_PATH").ok().map(PathBuf::from);

    tracing::info!("Configuration:");
    tracing::info!("  HOST: {}", host);
    tracing::info!("  PORT: {}", port);
    tracing::info!("  DATASET_PATH: {:?}", dataset_path);

    let state = AppState::new(dataset_path.as_deref())?;
    let app = create_router(state);

    let addr = SocketAddr::new(host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
