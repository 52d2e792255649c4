//! Stockpile Admin - the operator dashboard binary.
//!
//! # Architecture
//!
//! - Axum web framework, askama server-side templates
//! - Remote inventory REST API as the single source of truth
//! - No local database; sessions are cookie + in-memory store
//!
//! Configuration comes from the environment (see [`config`]); a `.env`
//! file is honored in development.
//!
//! [`config`]: stockpile_admin::config

#![cfg_attr(not(test), forbid(unsafe_code))]

use stockpile_admin::{app, config::AdminConfig, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stockpile_admin=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AdminConfig::from_env().expect("Failed to load configuration");
    let addr = config.socket_addr();
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!(%addr, "stockpile admin listening");

    axum::serve(listener, app(state))
        .await
        .expect("Server error");
}
