use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{routes::paths, server::HealHubServer};

/// Main OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::handlers::health::health_check,
        crate::handlers::health::version_info,

        // Symptom endpoints
        crate::handlers::symptoms::list_symptoms,
        crate::handlers::symptoms::list_diseases,
        crate::handlers::symptoms::predict,
    ),
    components(
        schemas(
            crate::handlers::health::HealthResponse,
            crate::handlers::health::VersionResponse,
            crate::handlers::symptoms::PredictRequest,
            crate::error::ApiErrorResponse,
            symptom_engine::SymptomInfo,
            symptom_engine::Prediction,
            symptom_engine::catalog::DiseaseSummary,
        )
    ),
    tags(
        (name = "health", description = "Service health and version"),
        (name = "symptoms", description = "Symptom taxonomy, disease catalog and specialty prediction"),
    ),
    info(
        title = "HealHub API",
        version = "0.1.0",
        description = "Symptom tracking API that ranks likely conditions and recommends a medical specialty. A triage aid, not a diagnostic tool.",
        contact(
            name = "HealHub Team",
            email = "team@healhub.dev",
        ),
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_docs_routes() -> Router<HealHubServer> {
    Router::new().route(paths::docs::OPENAPI, get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            paths::health::HEALTH,
            paths::health::VERSION,
            paths::symptoms::SYMPTOMS,
            paths::symptoms::DISEASES,
            paths::symptoms::PREDICT,
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
