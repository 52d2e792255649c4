//! Stockpile Admin library.
//!
//! The operator-facing dashboard for the inventory system, served as a
//! plain server-rendered web app: axum handlers, askama templates, and a
//! cached client for the remote inventory REST API. The remote API owns
//! all persistence and business rules; this crate is the screen in front
//! of it.
//!
//! The crate is a library so integration tests can assemble the same app
//! the binary serves.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod nav;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application: routes, session layer, request tracing.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(middleware::create_session_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
