//! Symptom matching engine for HealHub
//!
//! This crate turns a patient's reported symptoms into a short, ranked list of
//! candidate conditions with a recommended medical specialty for each. It is a
//! heuristic triage aid for directing patients to the right kind of doctor,
//! not a diagnostic tool.
//!
//! # Pipeline
//!
//! - **Taxonomy**: a fixed vocabulary of 24 symptoms with identifiers "1".."24"
//! - **Encoder**: reported identifiers become a binary presence vector
//! - **Scorer**: cosine similarity against every disease in the catalog
//! - **Ranker**: similarity × prior, small random perturbation, filter, sort,
//!   top three, specialty and advice annotation
//!
//! The catalog is immutable and shared by reference, so a single
//! [`Predictor`] can serve any number of concurrent callers.
//!
//! # Example
//!
//! ```rust
//! use symptom_engine::{Catalog, FixedNoise, Predictor};
//!
//! let predictor = Predictor::new(Catalog::builtin(), FixedNoise::neutral());
//! let predictions = predictor.predict(["1", "2", "22", "24"]);
//!
//! assert_eq!(predictions[0].disease, "Common Cold");
//! assert_eq!(predictions[0].recommended_specialties, vec!["General Physician"]);
//! ```

pub mod catalog;
pub mod error;
pub mod noise;
pub mod predictor;
pub mod taxonomy;
pub mod vector;

pub use catalog::{Catalog, DiseaseEntry};
pub use error::{CatalogError, Result};
pub use noise::{FixedNoise, NoiseSource, ThreadRngNoise};
pub use predictor::{Prediction, Predictor};
pub use taxonomy::{Symptom, SymptomInfo, SYMPTOM_COUNT};
pub use vector::{cosine_similarity, SymptomVector};
