//! Data model of the upstream analysis result.

pub mod food;
pub mod nutrient;
pub mod reading;

pub use food::{AnalysisEnvelope, Food, NutritionError, NutritionResult, UNKNOWN_FOOD_NAME};
pub use nutrient::{nutrient_label, NutrientKey};
pub use reading::{Level, NutrientReading};
