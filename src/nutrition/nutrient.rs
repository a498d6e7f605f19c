use serde::{Deserialize, Serialize};

/// Nutrients the analysis service reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientKey {
    Purine,
    Cholesterol,
    SaturatedFat,
    Sugar,
    Calories,
    Protein,
    Fiber,
    Fat,
    Calcium,
    Iron,
}

impl NutrientKey {
    /// Vocabulary order.
    pub const ALL: [NutrientKey; 10] = [
        NutrientKey::Purine,
        NutrientKey::Cholesterol,
        NutrientKey::SaturatedFat,
        NutrientKey::Sugar,
        NutrientKey::Calories,
        NutrientKey::Protein,
        NutrientKey::Fiber,
        NutrientKey::Fat,
        NutrientKey::Calcium,
        NutrientKey::Iron,
    ];

    /// Wire key, e.g. `saturated_fat`.
    pub fn as_str(self) -> &'static str {
        match self {
            NutrientKey::Purine => "purine",
            NutrientKey::Cholesterol => "cholesterol",
            NutrientKey::SaturatedFat => "saturated_fat",
            NutrientKey::Sugar => "sugar",
            NutrientKey::Calories => "calories",
            NutrientKey::Protein => "protein",
            NutrientKey::Fiber => "fiber",
            NutrientKey::Fat => "fat",
            NutrientKey::Calcium => "calcium",
            NutrientKey::Iron => "iron",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.as_str() == key)
    }

    /// Display label used in reason text.
    pub fn label(self) -> &'static str {
        match self {
            NutrientKey::Purine => "purine",
            NutrientKey::Cholesterol => "cholesterol",
            NutrientKey::SaturatedFat => "saturated fat",
            NutrientKey::Sugar => "sugar",
            NutrientKey::Calories => "calories",
            NutrientKey::Protein => "protein",
            NutrientKey::Fiber => "fiber",
            NutrientKey::Fat => "fat",
            NutrientKey::Calcium => "calcium",
            NutrientKey::Iron => "iron",
        }
    }
}

impl std::fmt::Display for NutrientKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label for an arbitrary key; unknown keys come back unchanged.
pub fn nutrient_label(key: &str) -> String {
    NutrientKey::from_key(key)
        .map(|n| n.label().to_string())
        .unwrap_or_else(|| key.to_string())
}
