use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::error::{api_success, ApiResponse, ApiResult};
use crate::server::HealHubServer;

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Overall system health status
    #[schema(example = "healthy")]
    pub status: String,
    /// Current timestamp in RFC3339 format
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub timestamp: String,
    /// API version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Server uptime in seconds
    #[schema(example = 3600)]
    pub uptime: u64,
    /// Individual component health checks
    pub checks: HashMap<String, String>,
}

/// Version information response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VersionResponse {
    /// Application name
    #[schema(example = "HealHub")]
    pub name: String,
    /// Application version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Number of symptoms in the taxonomy
    pub symptom_count: usize,
    /// Number of diseases in the catalog
    pub disease_count: usize,
}

const HEALTHY: &str = "healthy";
const DEGRADED: &str = "degraded";

/// Healthy only when every component check is healthy.
fn overall_status(checks: &HashMap<String, String>) -> &'static str {
    if checks.values().all(|status| status == HEALTHY) {
        HEALTHY
    } else {
        DEGRADED
    }
}

/// Health check handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "System is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(server): State<HealHubServer>,
) -> ApiResult<Json<ApiResponse<HealthResponse>>> {
    let engine_status = if server.catalog().is_empty() { DEGRADED } else { HEALTHY };
    let mut checks = HashMap::new();
    checks.insert("symptom_engine".to_string(), engine_status.to_string());

    let response = HealthResponse {
        status: overall_status(&checks).to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: server.uptime_secs(),
        checks,
    };

    Ok(Json(api_success(response)))
}

/// Version information handler
#[utoipa::path(
    get,
    path = "/version",
    tag = "health",
    responses(
        (status = 200, description = "Version information retrieved successfully", body = VersionResponse)
    )
)]
pub async fn version_info(
    State(server): State<HealHubServer>,
) -> ApiResult<Json<ApiResponse<VersionResponse>>> {
    let response = VersionResponse {
        name: server.config.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        symptom_count: symptom_engine::SYMPTOM_COUNT,
        disease_count: server.catalog().len(),
    };

    Ok(Json(api_success(response)))
}
