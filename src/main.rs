//! DemoDash Backend
//!
//! Serves the BloodLink and GateKeeper demo dashboards as composed JSON page
//! views, each app on its own bind address. All data is an in-memory fixture
//! set built at startup; nothing is persisted.

mod bloodlink;
mod config;
mod errors;
mod fixtures;
mod gatekeeper;
mod models;
mod ui;

use std::future::IntoFuture;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use errors::AppError;
use fixtures::DemoData;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<DemoData>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DemoDash Backend");
    tracing::info!("BloodLink bind address: {}", config.bloodlink_addr);
    tracing::info!("GateKeeper bind address: {}", config.gatekeeper_addr);

    // Build the fixture dataset once and inject it into both apps
    let state = AppState {
        data: Arc::new(fixtures::sample()),
    };

    let bloodlink_app = bloodlink::router(state.clone());
    let gatekeeper_app = gatekeeper::router(state);

    // Start both servers
    let bloodlink_listener = tokio::net::TcpListener::bind(config.bloodlink_addr).await?;
    let gatekeeper_listener = tokio::net::TcpListener::bind(config.gatekeeper_addr).await?;

    tracing::info!("BloodLink listening on {}", config.bloodlink_addr);
    tracing::info!("GateKeeper listening on {}", config.gatekeeper_addr);

    tokio::try_join!(
        axum::serve(bloodlink_listener, bloodlink_app).into_future(),
        axum::serve(gatekeeper_listener, gatekeeper_app).into_future(),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests;
