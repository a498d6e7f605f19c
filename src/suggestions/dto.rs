use serde::{Deserialize, Serialize};

use super::classifier::BucketEntry;
use crate::audience::{AudienceId, AudienceRule};
use crate::nutrition::{NutrientKey, NutritionResult};

/// Classification for one audience, as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestions {
    pub audience: AudienceId,
    pub audience_label: &'static str,
    pub focus: &'static str,
    pub more: Vec<BucketEntry>,
    pub limit: Vec<BucketEntry>,
    pub less: Vec<BucketEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub audience: Option<String>,
    pub nutrition_data: NutritionResult,
}

#[derive(Debug, Deserialize)]
pub struct AudienceQuery {
    #[serde(default)]
    pub audience: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AudienceItem {
    pub id: AudienceId,
    pub label: &'static str,
    pub focus: &'static str,
    pub default: bool,
    pub rule: &'static AudienceRule,
}

impl From<AudienceId> for AudienceItem {
    fn from(id: AudienceId) -> Self {
        Self {
            id,
            label: id.label(),
            focus: id.focus(),
            default: id == AudienceId::default(),
            rule: id.rule(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NutrientItem {
    pub key: NutrientKey,
    pub label: &'static str,
}
