//! Tripstop HTTP Server Binary
//!
//! Entry point for the suggestion REST API server. It constructs the
//! provider clients once from the environment, wires up application
//! state, and starts serving requests.
//!
//! # Environment Variables
//!
//! - `GOOGLE_MAPS_API_KEY`: API key for the places/directions providers (required)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 4000)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tripstop::config::ProviderConfig;
use tripstop::http::{create_router, AppState, LocalTokenVerifier};
use tripstop::prefs::LocalPreferenceStore;
use tripstop::providers::{GoogleDirectionsClient, GooglePlacesClient};
use tripstop::services::SuggestionEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Tripstop HTTP Server");

    // A missing provider credential is fatal at startup, not on the
    // first request.
    let config = ProviderConfig::from_env()?;

    // Construct provider clients once and inject them everywhere.
    let places = Arc::new(GooglePlacesClient::from_config(&config)?);
    let directions = Arc::new(GoogleDirectionsClient::from_config(&config)?);
    let engine = Arc::new(SuggestionEngine::new(places, directions));
    info!("Provider clients initialized");

    let state = AppState::new(
        engine,
        Arc::new(LocalPreferenceStore::new()),
        Arc::new(LocalTokenVerifier),
    );

    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(4000);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
