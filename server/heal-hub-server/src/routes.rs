use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    error::ApiError,
    handlers::{health, symptoms},
    openapi,
    server::HealHubServer,
};

pub mod paths;

/// Create health check routes
pub fn health_routes() -> Router<HealHubServer> {
    Router::new()
        .route(paths::health::HEALTH, get(health::health_check))
        .route(paths::health::VERSION, get(health::version_info))
}

/// Create symptom taxonomy, catalog and prediction routes
pub fn symptom_routes() -> Router<HealHubServer> {
    Router::new()
        .route(paths::symptoms::SYMPTOMS, get(symptoms::list_symptoms))
        .route(paths::symptoms::DISEASES, get(symptoms::list_diseases))
        .route(paths::symptoms::PREDICT, post(symptoms::predict))
}

/// Create the complete route tree
pub fn create_routes() -> Router<HealHubServer> {
    Router::new()
        .merge(health_routes())
        .merge(symptom_routes())
        .merge(openapi::create_docs_routes())
        .fallback(route_not_found)
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Route")
}
