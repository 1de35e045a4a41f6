//! Fixed symptom vocabulary
//!
//! The declaration order of [`Symptom`] is the taxonomy order: it defines
//! both the public identifier ("1" for the first variant) and the position
//! of the symptom inside a [`SymptomVector`](crate::SymptomVector).

use serde::{Deserialize, Serialize};

/// Number of symptoms in the taxonomy, and the length of every symptom vector.
pub const SYMPTOM_COUNT: usize = Symptom::ALL.len();

/// Symptoms whose presence triggers the therapist-consultation advice.
pub const THERAPIST_TRIGGERS: [Symptom; 2] = [Symptom::Anxiety, Symptom::HighBloodPressure];

/// Canonical symptom recognised by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Fever,
    Cough,
    Headache,
    Fatigue,
    ChestPain,
    ShortnessOfBreath,
    Nausea,
    Vomiting,
    Diarrhea,
    StomachPain,
    SkinRash,
    JointPain,
    BackPain,
    Dizziness,
    Anxiety,
    ExcessiveThirst,
    HighBloodPressure,
    EyePain,
    EarPain,
    Toothache,
    Sneezing,
    Cold,
    RunnyNose,
    SoreThroat,
}

impl Symptom {
    /// Every symptom, in taxonomy order.
    pub const ALL: [Symptom; 24] = [
        Symptom::Fever,
        Symptom::Cough,
        Symptom::Headache,
        Symptom::Fatigue,
        Symptom::ChestPain,
        Symptom::ShortnessOfBreath,
        Symptom::Nausea,
        Symptom::Vomiting,
        Symptom::Diarrhea,
        Symptom::StomachPain,
        Symptom::SkinRash,
        Symptom::JointPain,
        Symptom::BackPain,
        Symptom::Dizziness,
        Symptom::Anxiety,
        Symptom::ExcessiveThirst,
        Symptom::HighBloodPressure,
        Symptom::EyePain,
        Symptom::EarPain,
        Symptom::Toothache,
        Symptom::Sneezing,
        Symptom::Cold,
        Symptom::RunnyNose,
        Symptom::SoreThroat,
    ];

    /// Zero-based position in the taxonomy.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Public identifier: the one-based position as a decimal string.
    pub fn id(self) -> String {
        (self.index() + 1).to_string()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Resolve a client-supplied identifier.
    ///
    /// Returns `None` for anything that is not a decimal integer in
    /// `1..=SYMPTOM_COUNT`; callers drop such identifiers rather than fail.
    pub fn from_id(id: &str) -> Option<Self> {
        let position: usize = id.trim().parse().ok()?;
        position.checked_sub(1).and_then(Self::from_index)
    }

    /// Canonical snake_case name, e.g. `high_blood_pressure`.
    pub const fn name(self) -> &'static str {
        match self {
            Symptom::Fever => "fever",
            Symptom::Cough => "cough",
            Symptom::Headache => "headache",
            Symptom::Fatigue => "fatigue",
            Symptom::ChestPain => "chest_pain",
            Symptom::ShortnessOfBreath => "shortness_of_breath",
            Symptom::Nausea => "nausea",
            Symptom::Vomiting => "vomiting",
            Symptom::Diarrhea => "diarrhea",
            Symptom::StomachPain => "stomach_pain",
            Symptom::SkinRash => "skin_rash",
            Symptom::JointPain => "joint_pain",
            Symptom::BackPain => "back_pain",
            Symptom::Dizziness => "dizziness",
            Symptom::Anxiety => "anxiety",
            Symptom::ExcessiveThirst => "excessive_thirst",
            Symptom::HighBloodPressure => "high_blood_pressure",
            Symptom::EyePain => "eye_pain",
            Symptom::EarPain => "ear_pain",
            Symptom::Toothache => "toothache",
            Symptom::Sneezing => "sneezing",
            Symptom::Cold => "cold",
            Symptom::RunnyNose => "runny_nose",
            Symptom::SoreThroat => "sore_throat",
        }
    }

    /// Display label for symptom pickers.
    pub const fn label(self) -> &'static str {
        match self {
            Symptom::Fever => "Fever",
            Symptom::Cough => "Cough",
            Symptom::Headache => "Headache",
            Symptom::Fatigue => "Fatigue",
            Symptom::ChestPain => "Chest Pain",
            Symptom::ShortnessOfBreath => "Shortness of Breath",
            Symptom::Nausea => "Nausea",
            Symptom::Vomiting => "Vomiting",
            Symptom::Diarrhea => "Diarrhea",
            Symptom::StomachPain => "Stomach Pain",
            Symptom::SkinRash => "Skin Rash",
            Symptom::JointPain => "Joint Pain",
            Symptom::BackPain => "Back Pain",
            Symptom::Dizziness => "Dizziness",
            Symptom::Anxiety => "Anxiety",
            Symptom::ExcessiveThirst => "Excessive Thirst",
            Symptom::HighBloodPressure => "High Blood Pressure",
            Symptom::EyePain => "Eye Pain",
            Symptom::EarPain => "Ear Pain",
            Symptom::Toothache => "Toothache",
            Symptom::Sneezing => "Sneezing",
            Symptom::Cold => "Cold",
            Symptom::RunnyNose => "Runny Nose",
            Symptom::SoreThroat => "Sore Throat",
        }
    }

    pub fn info(self) -> SymptomInfo {
        SymptomInfo {
            id: self.id(),
            name: self.name().to_string(),
            label: self.label().to_string(),
        }
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Listing view of a taxonomy entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SymptomInfo {
    /// Identifier clients send back in prediction requests
    pub id: String,
    /// Canonical symptom name
    pub name: String,
    /// Human-readable label
    pub label: String,
}

/// The whole taxonomy as listing views.
pub fn all() -> Vec<SymptomInfo> {
    Symptom::ALL.iter().map(|symptom| symptom.info()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_follow_declaration_order() {
        for (position, symptom) in Symptom::ALL.iter().enumerate() {
            assert_eq!(symptom.index(), position);
            assert_eq!(symptom.id(), (position + 1).to_string());
            assert_eq!(Symptom::from_id(&symptom.id()), Some(*symptom));
        }
    }

    #[test]
    fn test_known_identifiers() {
        assert_eq!(Symptom::from_id("1"), Some(Symptom::Fever));
        assert_eq!(Symptom::from_id("2"), Some(Symptom::Cough));
        assert_eq!(Symptom::from_id("15"), Some(Symptom::Anxiety));
        assert_eq!(Symptom::from_id("17"), Some(Symptom::HighBloodPressure));
        assert_eq!(Symptom::from_id("22"), Some(Symptom::Cold));
        assert_eq!(Symptom::from_id("24"), Some(Symptom::SoreThroat));
    }

    #[test]
    fn test_unresolvable_identifiers() {
        for id in ["0", "25", "999", "-1", "", "fever", "1.5", "0x1"] {
            assert_eq!(Symptom::from_id(id), None, "id {id:?} should not resolve");
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(Symptom::from_id(" 3 "), Some(Symptom::Headache));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Symptom::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SYMPTOM_COUNT);
    }

    #[test]
    fn test_serde_name_matches_canonical_name() {
        for symptom in Symptom::ALL {
            let json = serde_json::to_string(&symptom).unwrap();
            assert_eq!(json, format!("\"{}\"", symptom.name()));
        }
    }

    #[test]
    fn test_listing_covers_taxonomy() {
        let listing = all();
        assert_eq!(listing.len(), 24);
        assert_eq!(listing[16].id, "17");
        assert_eq!(listing[16].name, "high_blood_pressure");
        assert_eq!(listing[16].label, "High Blood Pressure");
    }
}
