//! Symptom taxonomy, disease catalog and prediction endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use symptom_engine::{catalog::DiseaseSummary, taxonomy, Prediction, SymptomInfo};
use tracing::info;
use utoipa::ToSchema;

use crate::error::{ApiError, ApiResult};
use crate::server::HealHubServer;
use crate::validation::RequestValidation;
use crate::validate_present;

pub const SYMPTOMS_REQUIRED: &str = "Symptoms array is required";

/// Prediction request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct PredictRequest {
    /// Reported symptom identifiers, e.g. `["1", "2"]`
    #[serde(default)]
    pub symptoms: Option<Vec<String>>,
}

impl RequestValidation for PredictRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_present!("symptoms", self.symptoms, SYMPTOMS_REQUIRED);
        Ok(())
    }
}

/// List the symptom taxonomy
#[utoipa::path(
    get,
    path = "/api/symptoms",
    tag = "symptoms",
    responses(
        (status = 200, description = "Symptom taxonomy in identifier order", body = Vec<SymptomInfo>)
    )
)]
pub async fn list_symptoms() -> Json<Vec<SymptomInfo>> {
    Json(taxonomy::all())
}

/// List the disease catalog
#[utoipa::path(
    get,
    path = "/api/symptoms/diseases",
    tag = "symptoms",
    responses(
        (status = 200, description = "Diseases in catalog order", body = Vec<DiseaseSummary>)
    )
)]
pub async fn list_diseases(State(server): State<HealHubServer>) -> Json<Vec<DiseaseSummary>> {
    Json(server.catalog().summaries())
}

/// Rank likely conditions for a list of reported symptoms
#[utoipa::path(
    post,
    path = "/api/symptoms/predict",
    tag = "symptoms",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "One to three predictions, most likely first", body = Vec<Prediction>),
        (status = 400, description = "Missing or empty symptom list", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn predict(
    State(server): State<HealHubServer>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<Prediction>>> {
    let Json(request) = payload.map_err(|rejection| match rejection {
        // Well-formed JSON whose `symptoms` is not a list of strings.
        JsonRejection::JsonDataError(_) => ApiError::validation_for_field("symptoms", SYMPTOMS_REQUIRED),
        other => ApiError::from(other),
    })?;
    request.validate()?;

    let symptoms = request.symptoms.unwrap_or_default();
    let predictions = server.predictor.predict(&symptoms);

    info!(
        reported = symptoms.len(),
        returned = predictions.len(),
        top = predictions.first().map_or("", |p| p.disease.as_str()),
        "Symptom prediction served"
    );

    Ok(Json(predictions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_symptoms_fail_validation() {
        let request: PredictRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.validate().unwrap_err().message(), SYMPTOMS_REQUIRED);
    }

    #[test]
    fn test_null_and_empty_symptoms_fail_validation() {
        for body in [r#"{"symptoms": null}"#, r#"{"symptoms": []}"#] {
            let request: PredictRequest = serde_json::from_str(body).unwrap();
            assert!(request.validate().is_err(), "{body} should be rejected");
        }
    }

    #[test]
    fn test_non_empty_symptoms_pass_validation() {
        let request: PredictRequest = serde_json::from_str(r#"{"symptoms": ["999"]}"#).unwrap();
        assert!(request.validate().is_ok());
    }
}
