//! Disease catalog scored by the predictor
//!
//! A [`Catalog`] is validated once when it is built and is read-only
//! afterwards. The built-in catalog is created lazily on first use and
//! shared process-wide through [`Catalog::builtin`].

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;
use tracing::error;

use crate::error::{CatalogError, Result};
use crate::taxonomy::Symptom;
use crate::vector::SymptomVector;

/// Specialty recommended when a disease does not name one.
pub const DEFAULT_SPECIALTY: &str = "General Physician";

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| validated_or_empty(builtin_entries()));

/// Validate `entries`, logging and serving an empty catalog when they are
/// rejected. An empty catalog answers every report with the fallback.
fn validated_or_empty(entries: Vec<DiseaseEntry>) -> Catalog {
    Catalog::new(entries).unwrap_or_else(|err| {
        error!(error = %err, "Built-in disease catalog rejected, serving empty catalog");
        Catalog { entries: Vec::new() }
    })
}

/// Immutable catalog record for one disease
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseEntry {
    name: String,
    vector: SymptomVector,
    specialty: String,
    base_prior: f64,
}

impl DiseaseEntry {
    pub fn new(
        name: impl Into<String>,
        symptoms: &[Symptom],
        specialty: impl Into<String>,
        base_prior: f64,
    ) -> Self {
        Self {
            name: name.into(),
            vector: SymptomVector::from_symptoms(symptoms),
            specialty: specialty.into(),
            base_prior,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vector(&self) -> &SymptomVector {
        &self.vector
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    /// Multiplicative weight applied to the similarity score.
    pub fn base_prior(&self) -> f64 {
        self.base_prior
    }

    /// Specialties to surface with a prediction, falling back to
    /// [`DEFAULT_SPECIALTY`] when none is configured.
    pub fn recommended_specialties(&self) -> Vec<String> {
        let specialty = self.specialty.trim();
        if specialty.is_empty() {
            vec![DEFAULT_SPECIALTY.to_string()]
        } else {
            vec![specialty.to_string()]
        }
    }

    pub fn summary(&self) -> DiseaseSummary {
        DiseaseSummary {
            name: self.name.clone(),
            symptoms: self.vector.symptoms().map(Symptom::id).collect(),
            specialty: self.specialty.clone(),
            base_prior_probability: self.base_prior,
        }
    }
}

/// Listing view of a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DiseaseSummary {
    pub name: String,
    /// Symptom identifiers that define the disease
    pub symptoms: Vec<String>,
    pub specialty: String,
    pub base_prior_probability: f64,
}

/// Ordered, validated set of diseases.
///
/// Catalog order is the tie-break order when two predictions end with the
/// same probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<DiseaseEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting misconfigured entries.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the list is empty, a name is blank or
    /// repeated, or a base prior is not a finite value in (0, 1].
    pub fn new(entries: Vec<DiseaseEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateName(entry.name.clone()));
            }
            if !(entry.base_prior.is_finite() && entry.base_prior > 0.0 && entry.base_prior <= 1.0) {
                return Err(CatalogError::InvalidPrior {
                    disease: entry.name.clone(),
                    prior: entry.base_prior,
                });
            }
        }

        Ok(Self { entries })
    }

    /// The built-in catalog, shared process-wide.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn entries(&self) -> &[DiseaseEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiseaseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&DiseaseEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn summaries(&self) -> Vec<DiseaseSummary> {
        self.entries.iter().map(DiseaseEntry::summary).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a DiseaseEntry;
    type IntoIter = std::slice::Iter<'a, DiseaseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn builtin_entries() -> Vec<DiseaseEntry> {
    use Symptom::*;

    vec![
        DiseaseEntry::new("Common Cold", &[Fever, Cough, Cold, SoreThroat], "General Physician", 0.85),
        DiseaseEntry::new("Influenza", &[Fever, Cough, Headache, Fatigue, JointPain], "General Physician", 0.80),
        DiseaseEntry::new("Migraine", &[Headache, Nausea, Anxiety], "Neurology", 0.80),
        DiseaseEntry::new("Hypertension", &[Headache, ChestPain, Dizziness, HighBloodPressure], "Cardiologists", 0.75),
        DiseaseEntry::new("Gastroenteritis", &[Nausea, Vomiting, Diarrhea, StomachPain], "Gastroenterologists", 0.80),
        DiseaseEntry::new("Asthma", &[Cough, ChestPain, ShortnessOfBreath], "Pulmonologists Doctors", 0.70),
        DiseaseEntry::new("Allergic Rhinitis", &[Cough, Sneezing, RunnyNose], "Allergist", 0.75),
        DiseaseEntry::new("Dermatitis", &[SkinRash], "Dermatologists", 0.70),
        DiseaseEntry::new("Arthritis", &[JointPain, BackPain], "Orthopaedic", 0.70),
        DiseaseEntry::new("Diabetes", &[Fatigue, ExcessiveThirst, EyePain], "Endocrinologist", 0.65),
        DiseaseEntry::new("Anxiety Disorder", &[Fatigue, ChestPain, Dizziness, Anxiety], "Psychiatrist", 0.70),
        DiseaseEntry::new("Ear Infection", &[Fever, EarPain], "ENT Doctors", 0.70),
        DiseaseEntry::new("Dental Abscess", &[Fever, Toothache], "Dentist", 0.65),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(Catalog::new(builtin_entries()).is_ok());
        assert_eq!(Catalog::builtin().len(), 13);
    }

    #[test]
    fn test_rejected_entries_fall_back_to_empty_catalog() {
        let entries = vec![
            DiseaseEntry::new("Flu", &[Symptom::Fever], "General Physician", 0.8),
            DiseaseEntry::new("Flu", &[Symptom::Cough], "General Physician", 0.8),
        ];
        assert!(validated_or_empty(entries).is_empty());
        assert_eq!(validated_or_empty(builtin_entries()).len(), 13);
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }

    #[test]
    fn test_builtin_entries_have_symptoms_and_specialties() {
        for entry in Catalog::builtin() {
            assert!(!entry.vector().is_zero(), "{} has no symptoms", entry.name());
            assert!(!entry.specialty().is_empty(), "{} has no specialty", entry.name());
        }
    }

    #[test]
    fn test_common_cold_definition() {
        let cold = Catalog::builtin().get("Common Cold").unwrap();
        assert_eq!(
            cold.vector(),
            &SymptomVector::encode(["1", "2", "22", "24"])
        );
        assert_eq!(cold.recommended_specialties(), vec!["General Physician"]);
        assert!((cold.base_prior() - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_specialty_falls_back_to_general_physician() {
        let blank = DiseaseEntry::new("Unlabelled", &[Symptom::Fever], "", 0.5);
        let spaces = DiseaseEntry::new("Spaces", &[Symptom::Fever], "   ", 0.5);

        assert_eq!(blank.recommended_specialties(), vec![DEFAULT_SPECIALTY]);
        assert_eq!(spaces.recommended_specialties(), vec![DEFAULT_SPECIALTY]);
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = Catalog::new(vec![
            DiseaseEntry::new("Flu", &[Symptom::Fever], "General Physician", 0.5),
            DiseaseEntry::new("Flu", &[Symptom::Cough], "General Physician", 0.5),
        ]);
        assert_eq!(result, Err(CatalogError::DuplicateName("Flu".to_string())));
    }

    #[test]
    fn test_rejects_blank_name() {
        let result = Catalog::new(vec![DiseaseEntry::new(" ", &[Symptom::Fever], "Dentist", 0.5)]);
        assert_eq!(result, Err(CatalogError::EmptyName));
    }

    #[test]
    fn test_rejects_out_of_range_priors() {
        for prior in [0.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            let result = Catalog::new(vec![DiseaseEntry::new("Flu", &[Symptom::Fever], "Dentist", prior)]);
            assert!(
                matches!(result, Err(CatalogError::InvalidPrior { .. })),
                "prior {prior} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_prior_of_one() {
        let catalog = Catalog::new(vec![DiseaseEntry::new("Flu", &[Symptom::Fever], "Dentist", 1.0)]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_summary_lists_symptom_ids() {
        let summary = Catalog::builtin().get("Migraine").unwrap().summary();
        assert_eq!(summary.symptoms, vec!["3", "7", "15"]);
        assert_eq!(summary.specialty, "Neurology");

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("basePriorProbability").is_some());
    }
}
