//! Binary symptom presence vectors and cosine similarity

use crate::taxonomy::{Symptom, SYMPTOM_COUNT};

/// Presence vector over the taxonomy.
///
/// Position `i` is 1 iff the symptom at taxonomy index `i` is present. The
/// length is fixed by the type, so every vector in the system has the same
/// dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SymptomVector([u8; SYMPTOM_COUNT]);

impl SymptomVector {
    pub const fn zero() -> Self {
        Self([0; SYMPTOM_COUNT])
    }

    /// Encode client-supplied symptom identifiers.
    ///
    /// Identifiers that do not resolve into the taxonomy are dropped.
    /// Presence is binary: order and repetition do not affect the result.
    pub fn encode<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .filter_map(|id| Symptom::from_id(id.as_ref()))
            .collect()
    }

    pub fn from_symptoms(symptoms: &[Symptom]) -> Self {
        symptoms.iter().copied().collect()
    }

    pub fn insert(&mut self, symptom: Symptom) {
        if let Some(slot) = self.0.get_mut(symptom.index()) {
            *slot = 1;
        }
    }

    pub fn contains(&self, symptom: Symptom) -> bool {
        self.0.get(symptom.index()).is_some_and(|&bit| bit == 1)
    }

    /// Number of symptoms present.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&bit| bit == 1).count()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&bit| bit == 0)
    }

    /// Present symptoms in taxonomy order.
    pub fn symptoms(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, bit)| **bit == 1)
            .filter_map(|(index, _)| Symptom::from_index(index))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn dot(&self, other: &Self) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(&a, &b)| u32::from(a) * u32::from(b))
            .sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        f64::from(self.dot(self)).sqrt()
    }
}

impl FromIterator<Symptom> for SymptomVector {
    fn from_iter<T: IntoIterator<Item = Symptom>>(iter: T) -> Self {
        let mut vector = Self::zero();
        for symptom in iter {
            vector.insert(symptom);
        }
        vector
    }
}

/// Cosine similarity `dot(a, b) / (|a| * |b|)`.
///
/// Defined as 0.0 when either vector is all zeros. For binary vectors the
/// result lies in [0, 1]; it is clamped there to absorb rounding.
pub fn cosine_similarity(a: &SymptomVector, b: &SymptomVector) -> f64 {
    let norms = a.norm() * b.norm();
    if norms == 0.0 {
        return 0.0;
    }

    (f64::from(a.dot(b)) / norms).clamp(0.0, 1.0)
}
