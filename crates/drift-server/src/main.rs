//! Drift server - wind-drift trajectory prediction over HTTP.

mod api;
mod config;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("drift_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting drift server...");

    let config = Config::from_env();
    let port = config.server_port;
    let static_dir = config.static_dir.clone();
    let state = Arc::new(AppState::new(config));

    // Build the app
    let app = api::routes()
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state) // Inject state into all routes
        .layer(CorsLayer::permissive());

    // Run server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
