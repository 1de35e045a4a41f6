//! Centralized API route path constants
//!
//! utoipa `#[path(...)]` attributes need string literals, so the paths in
//! handler attributes must match these constants exactly.

/// Health check endpoints
pub mod health {
    pub const HEALTH: &str = "/health";
    pub const VERSION: &str = "/version";
}

/// Symptom matching endpoints
pub mod symptoms {
    pub const SYMPTOMS: &str = "/api/symptoms";
    pub const DISEASES: &str = "/api/symptoms/diseases";
    pub const PREDICT: &str = "/api/symptoms/predict";
}

/// API documentation endpoints
pub mod docs {
    pub const OPENAPI: &str = "/api-docs/openapi.json";
}
