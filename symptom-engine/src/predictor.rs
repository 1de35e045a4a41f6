//! Ranking and advice policy on top of the similarity scorer

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, DiseaseEntry, DEFAULT_SPECIALTY};
use crate::noise::{perturbation, NoiseSource, ThreadRngNoise};
use crate::taxonomy::THERAPIST_TRIGGERS;
use crate::vector::{cosine_similarity, SymptomVector};

/// Maximum number of predictions returned per request.
pub const MAX_PREDICTIONS: usize = 3;

/// Upper bound on a reported probability.
pub const PROBABILITY_CEILING: f64 = 0.95;

/// Disease name of the fallback prediction used when nothing matches.
pub const NO_MATCH_DISEASE: &str = "No specific match";

/// Probability reported with the fallback prediction.
pub const NO_MATCH_PROBABILITY: f64 = 0.5;

pub const THERAPIST_ADVICE: &str = "Consider visiting a therapist for further evaluation.";

/// One scored and annotated candidate disease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Disease name, or "No specific match" for the fallback entry
    pub disease: String,
    /// Perturbed and bounded score in [0, 0.95]
    pub probability: f64,
    /// Raw cosine similarity in [0, 1]
    pub similarity: f64,
    /// Specialty display strings for the practitioner lookup
    pub recommended_specialties: Vec<String>,
    /// Free-text advice, empty when none applies
    pub advice: String,
}

impl Prediction {
    /// Fallback returned when no disease shares a symptom with the report.
    pub fn no_match(advice: String) -> Self {
        Self {
            disease: NO_MATCH_DISEASE.to_string(),
            probability: NO_MATCH_PROBABILITY,
            similarity: 0.0,
            recommended_specialties: vec![DEFAULT_SPECIALTY.to_string()],
            advice,
        }
    }
}

/// Advice attached to every prediction for a report.
///
/// Depends on the reported symptoms only, never on the disease scored.
pub fn advice_for(reported: &SymptomVector) -> String {
    if THERAPIST_TRIGGERS.iter().any(|&symptom| reported.contains(symptom)) {
        THERAPIST_ADVICE.to_string()
    } else {
        String::new()
    }
}

/// Add the perturbation for `draw` and bound the result to
/// `[0, PROBABILITY_CEILING]`.
fn perturb(probability: f64, draw: f64) -> f64 {
    let offset = if draw.is_finite() {
        perturbation(draw.clamp(0.0, 1.0))
    } else {
        0.0
    };
    (probability + offset).clamp(0.0, PROBABILITY_CEILING)
}

/// Scores symptom reports against a catalog.
///
/// Holds the catalog by reference and keeps no per-request state, so one
/// predictor can be shared across threads.
#[derive(Debug, Clone)]
pub struct Predictor<'c, N = ThreadRngNoise> {
    catalog: &'c Catalog,
    noise: N,
}

impl Predictor<'static, ThreadRngNoise> {
    /// Built-in catalog with thread-local randomness.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin(), ThreadRngNoise)
    }
}

impl<'c, N: NoiseSource> Predictor<'c, N> {
    pub fn new(catalog: &'c Catalog, noise: N) -> Self {
        Self { catalog, noise }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Rank the catalog against reported symptom identifiers.
    ///
    /// Always returns between one and [`MAX_PREDICTIONS`] entries ordered by
    /// descending probability. Unknown identifiers are ignored; a report
    /// with no usable symptom yields the single "No specific match" entry.
    pub fn predict<I, S>(&self, ids: I) -> Vec<Prediction>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.predict_vector(&SymptomVector::encode(ids))
    }

    pub fn predict_vector(&self, reported: &SymptomVector) -> Vec<Prediction> {
        let advice = advice_for(reported);

        // One draw per catalog entry, in catalog order, before filtering.
        let mut candidates: Vec<Prediction> = self
            .catalog
            .iter()
            .map(|entry| self.score(entry, reported, &advice))
            .filter(|prediction| prediction.similarity > 0.0)
            .collect();

        debug!(
            valid_symptoms = reported.count(),
            candidates = candidates.len(),
            "Scored symptom report"
        );

        if candidates.is_empty() {
            return vec![Prediction::no_match(advice)];
        }

        // Stable sort: exact ties keep catalog order.
        candidates.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        candidates.truncate(MAX_PREDICTIONS);
        candidates
    }

    fn score(&self, entry: &DiseaseEntry, reported: &SymptomVector, advice: &str) -> Prediction {
        let similarity = cosine_similarity(reported, entry.vector());
        let probability = perturb(similarity * entry.base_prior(), self.noise.draw());

        Prediction {
            disease: entry.name().to_string(),
            probability,
            similarity,
            recommended_specialties: entry.recommended_specialties(),
            advice: advice.to_string(),
        }
    }
}
