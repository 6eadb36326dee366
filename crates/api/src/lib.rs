//! HTTP API server for the threat detection service.
//!
//! Serves a single route, `GET /detect`, backed by a shared [`Detector`],
//! with structured request logging (tracing).

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use detection::{Detector, StaticDetector};
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError, LogFormat};
pub use error::ApiError;
pub use server::{RunningServer, Server, ServerError};

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub detector: Arc<dyn Detector>,
}

impl AppState {
    pub fn new(detector: Arc<dyn Detector>) -> Self {
        Self { detector }
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/detect", get(routes::detect::detect))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state around [`StaticDetector`].
pub fn create_default_state() -> Arc<AppState> {
    Arc::new(AppState::new(Arc::new(StaticDetector::new())))
}
