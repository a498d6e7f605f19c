use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use super::nutrient::NutrientKey;
use super::reading::{Level, NutrientReading};

pub const UNKNOWN_FOOD_NAME: &str = "Unknown food";

/// A recognised food and whichever readings the analysis produced for it.
///
/// On the wire a food is flat: `{"name": .., "sugar": {..}, "fiber": {..}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Food {
    pub name: String,
    #[serde(flatten)]
    pub readings: BTreeMap<NutrientKey, NutrientReading>,
}

impl Food {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            readings: BTreeMap::new(),
        }
    }

    pub fn with_reading(mut self, nutrient: NutrientKey, reading: NutrientReading) -> Self {
        self.readings.insert(nutrient, reading);
        self
    }

    /// Shorthand for tests and fixtures: a reading with only a level.
    pub fn with_level(self, nutrient: NutrientKey, level: Level) -> Self {
        self.with_reading(nutrient, NutrientReading::new(nutrient, level, 0.0, ""))
    }

    pub fn reading(&self, nutrient: NutrientKey) -> Option<&NutrientReading> {
        self.readings.get(&nutrient)
    }

    /// `None` when the nutrient was not measured.
    pub fn level(&self, nutrient: NutrientKey) -> Option<Level> {
        self.reading(nutrient).map(|r| r.level)
    }
}

impl From<Map<String, Value>> for Food {
    fn from(raw: Map<String, Value>) -> Self {
        let name = raw
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN_FOOD_NAME)
            .to_string();

        let mut readings = BTreeMap::new();
        for (key, value) in &raw {
            let Some(nutrient) = NutrientKey::from_key(key) else {
                continue;
            };
            match NutrientReading::from_value(nutrient, value) {
                Some(reading) => {
                    readings.insert(nutrient, reading);
                }
                None => debug!(food = %name, %nutrient, "reading has no usable level; ignored"),
            }
        }

        Self { name, readings }
    }
}

/// One analysed image: foods in the order the service listed them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNutritionResult")]
pub struct NutritionResult {
    pub foods: Vec<Food>,
    pub suggestions: Vec<String>,
}

#[derive(Deserialize)]
struct RawNutritionResult {
    #[serde(default)]
    foods: Vec<Value>,
    #[serde(default)]
    suggestions: Vec<Value>,
}

impl From<RawNutritionResult> for NutritionResult {
    fn from(raw: RawNutritionResult) -> Self {
        let foods = raw
            .foods
            .into_iter()
            .enumerate()
            .filter_map(|(idx, v)| match v {
                Value::Object(map) => Some(Food::from(map)),
                other => {
                    debug!(index = idx, kind = %value_kind(&other), "food entry is not an object; skipped");
                    None
                }
            })
            .collect();
        let suggestions = raw
            .suggestions
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect();
        Self { foods, suggestions }
    }
}

impl NutritionResult {
    pub fn new(foods: Vec<Food>) -> Self {
        Self {
            foods,
            suggestions: Vec::new(),
        }
    }

    /// Parses either a bare nutrition result or the analysis service
    /// envelope `{"success": .., "nutrition_data": .., "error": ..}`.
    pub fn from_json(text: &str) -> Result<Self, NutritionError> {
        let value: Value = serde_json::from_str(text)?;
        let is_envelope = ["success", "nutrition_data", "error"]
            .iter()
            .any(|marker| value.get(marker).is_some());
        if is_envelope {
            let envelope: AnalysisEnvelope = serde_json::from_value(value)?;
            return envelope.into_result();
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Response envelope of the image analysis service.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisEnvelope {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub nutrition_data: Option<NutritionResult>,
    #[serde(default)]
    pub error: Option<String>,
}

fn default_success() -> bool {
    true
}

impl AnalysisEnvelope {
    /// An `error` member means failure even when `success` is absent or true.
    pub fn into_result(self) -> Result<NutritionResult, NutritionError> {
        if let Some(error) = self.error {
            return Err(NutritionError::AnalysisFailed(error));
        }
        if !self.success {
            return Err(NutritionError::AnalysisFailed("analysis failed".into()));
        }
        self.nutrition_data.ok_or(NutritionError::MissingData)
    }
}

#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("invalid nutrition json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("analysis service reported failure: {0}")]
    AnalysisFailed(String),
    #[error("analysis response has no nutrition_data")]
    MissingData,
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "foods": [
                {
                    "name": "Steamed rice",
                    "purine": {"value": 18, "unit": "mg", "level": "low", "emoji": "🟢"},
                    "sugar": {"value": 0.1, "unit": "g", "level": "low"},
                    "calories": {"value": 116, "unit": "kcal", "level": "medium"}
                },
                {
                    "sugar": {"value": 20, "unit": "g", "level": "high"},
                    "sodium": {"value": 400, "unit": "mg", "level": "high"}
                },
                "not a food",
                {
                    "name": "Pork liver",
                    "cholesterol": {"value": 288, "unit": "mg"},
                    "protein": {"value": 19.3, "unit": "g", "level": "medium"}
                }
            ],
            "suggestions": ["Pair rice with vegetables", 42]
        })
    }

    #[test]
    fn test_decode_keeps_order_and_known_nutrients() {
        let result: NutritionResult = serde_json::from_value(sample()).unwrap();
        assert_eq!(result.foods.len(), 3);
        assert_eq!(result.foods[0].name, "Steamed rice");
        assert_eq!(result.foods[0].readings.len(), 3);
        assert_eq!(result.foods[0].level(NutrientKey::Calories), Some(Level::Medium));
        assert_eq!(result.suggestions, vec!["Pair rice with vegetables".to_string()]);
    }

    #[test]
    fn test_missing_name_gets_placeholder() {
        let result: NutritionResult = serde_json::from_value(sample()).unwrap();
        let unnamed = &result.foods[1];
        assert_eq!(unnamed.name, UNKNOWN_FOOD_NAME);
        assert_eq!(unnamed.level(NutrientKey::Sugar), Some(Level::High));
        assert_eq!(unnamed.readings.len(), 1, "unknown nutrient keys are ignored");
    }

    #[test]
    fn test_reading_without_level_is_absent() {
        let result: NutritionResult = serde_json::from_value(sample()).unwrap();
        let liver = &result.foods[2];
        assert_eq!(liver.level(NutrientKey::Cholesterol), None);
        assert_eq!(liver.level(NutrientKey::Protein), Some(Level::Medium));
        assert_eq!(liver.level(NutrientKey::Fiber), None);
    }

    #[test]
    fn test_empty_object_is_empty_result() {
        let result: NutritionResult = serde_json::from_str("{}").unwrap();
        assert!(result.foods.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_food_serializes_flat() {
        let food = Food::new("Tofu").with_level(NutrientKey::Protein, Level::High);
        let json = serde_json::to_value(&food).unwrap();
        assert_eq!(json["name"], "Tofu");
        assert_eq!(json["protein"]["level"], "high");
        assert_eq!(json["protein"]["emoji"], "🟢");
    }

    #[test]
    fn test_from_json_accepts_envelope() {
        let text = json!({"success": true, "nutrition_data": sample()}).to_string();
        let result = NutritionResult::from_json(&text).unwrap();
        assert_eq!(result.foods.len(), 3);
    }

    #[test]
    fn test_from_json_accepts_bare_result() {
        let result = NutritionResult::from_json(&sample().to_string()).unwrap();
        assert_eq!(result.foods[2].name, "Pork liver");
    }

    #[test]
    fn test_from_json_surfaces_upstream_failure() {
        let text = json!({"success": false, "error": "No image file provided"}).to_string();
        match NutritionResult::from_json(&text) {
            Err(NutritionError::AnalysisFailed(msg)) => assert_eq!(msg, "No image file provided"),
            other => panic!("unexpected: {:?}", other),
        }
        let text = json!({"success": true}).to_string();
        assert!(matches!(
            NutritionResult::from_json(&text),
            Err(NutritionError::MissingData)
        ));
    }

    #[test]
    fn test_from_json_treats_bare_error_body_as_failure() {
        let text = json!({"error": "No image file provided"}).to_string();
        match NutritionResult::from_json(&text) {
            Err(NutritionError::AnalysisFailed(msg)) => assert_eq!(msg, "No image file provided"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_error_member_wins_over_success_flag() {
        let envelope: AnalysisEnvelope = serde_json::from_value(json!({
            "success": true,
            "nutrition_data": {"foods": []},
            "error": "model timeout"
        }))
        .unwrap();
        assert!(matches!(
            envelope.into_result(),
            Err(NutritionError::AnalysisFailed(ref m)) if m == "model timeout"
        ));

        let envelope: AnalysisEnvelope =
            serde_json::from_value(json!({"success": false})).unwrap();
        assert!(matches!(
            envelope.into_result(),
            Err(NutritionError::AnalysisFailed(ref m)) if m == "analysis failed"
        ));
    }

    #[test]
    fn test_name_is_kept_as_sent() {
        let result: NutritionResult = serde_json::from_value(json!({"foods": [
            {"name": "  Mapo tofu "},
            {"name": ""},
            {"name": 7}
        ]}))
        .unwrap();
        assert_eq!(result.foods[0].name, "  Mapo tofu ");
        assert_eq!(result.foods[1].name, UNKNOWN_FOOD_NAME);
        assert_eq!(result.foods[2].name, UNKNOWN_FOOD_NAME);
    }

    #[test]
    fn test_non_canonical_level_is_no_signal() {
        let result: NutritionResult = serde_json::from_value(json!({"foods": [
            {"name": "X", "sugar": {"level": "Medium"}, "fiber": {"level": " low"}}
        ]}))
        .unwrap();
        assert!(result.foods[0].readings.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            NutritionResult::from_json("not json"),
            Err(NutritionError::Json(_))
        ));
    }
}
