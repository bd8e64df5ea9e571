//! Climate classification inference server
//!
//! Serves a pre-trained classifier over HTTP: a JSON payload of feature
//! values is turned into an ordered vector, scaled with the fitted
//! scaler, and classified. The fitted artifacts are loaded once at
//! startup and shared read-only across requests.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod features;
pub mod handlers;
pub mod model;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use artifacts::Artifacts;
pub use config::Config;
pub use error::{PredictError, PredictResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub artifacts: Arc<Artifacts>,
    pub config: Config,
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/predict", post(handlers::predict::predict))
        .route("/health", get(handlers::health::check))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
