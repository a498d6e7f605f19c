use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::nutrient::NutrientKey;

/// Qualitative level assigned upstream to a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Level::Low),
            "medium" => Some(Level::Medium),
            "high" => Some(Level::High),
            _ => None,
        }
    }

    /// Traffic-light glyph for a level. Protein reads the other way round:
    /// a lot of it is good news.
    pub fn glyph_for(self, nutrient: NutrientKey) -> &'static str {
        match (nutrient, self) {
            (NutrientKey::Protein, Level::High) => "🟢",
            (NutrientKey::Protein, Level::Low) => "⚠️",
            (_, Level::High) => "🔴",
            (_, Level::Low) => "🟢",
            (_, Level::Medium) => "🟡",
        }
    }
}

/// One nutrient's measurement for one food.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientReading {
    pub level: Level,
    pub value: f64,
    pub unit: String,
    #[serde(rename = "emoji")]
    pub glyph: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl NutrientReading {
    pub fn new(nutrient: NutrientKey, level: Level, value: f64, unit: impl Into<String>) -> Self {
        Self {
            level,
            value,
            unit: unit.into(),
            glyph: level.glyph_for(nutrient).to_string(),
            source: None,
        }
    }

    /// Lenient decode of one `{"value", "unit", "level", "emoji"}` member.
    /// Returns `None` when there is no usable level; such a reading carries
    /// no signal.
    pub fn from_value(nutrient: NutrientKey, raw: &Value) -> Option<Self> {
        let obj = raw.as_object()?;
        let level = obj.get("level").and_then(Value::as_str).and_then(Level::parse)?;
        let value = match obj.get("value") {
            Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
            Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
            _ => 0.0,
        };
        let unit = obj
            .get("unit")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let glyph = obj
            .get("emoji")
            .and_then(Value::as_str)
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| level.glyph_for(nutrient))
            .to_string();
        let source = obj.get("source").and_then(Value::as_str).map(str::to_string);

        Some(Self {
            level,
            value,
            unit,
            glyph,
            source,
        })
    }
}
