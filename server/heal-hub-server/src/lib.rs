//! HealHub Server - symptom tracking and specialty recommendation API
//!
//! This library provides the HTTP surface over the `symptom-engine` crate:
//! taxonomy and catalog listings, prediction, health checks and the OpenAPI
//! document.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod validation;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::*;
pub use server::HealHubServer;

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: HealHubServer) -> Router {
    let config = server.get_config();
    let cors = middleware::create_cors_layer(&config.allowed_origins);
    let timeout = middleware::create_timeout_layer(config.request_timeout_secs);

    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(timeout)
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server)
}
