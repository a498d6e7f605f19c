use serde::{Deserialize, Serialize};

use crate::nutrition::NutrientKey::{self, *};
use crate::nutrition::Level;

/// Dietary-concern profiles a user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceId {
    #[default]
    Cholesterol,
    FatLoss,
    MuscleGain,
    Diabetes,
    Children,
    Elderly,
    Pregnant,
}

/// Which nutrients an audience watches, per tier.
///
/// Lists are ordered; reasons are emitted in list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AudienceRule {
    /// Favourable when the reading is low.
    pub more: &'static [NutrientKey],
    /// Caution when the reading is medium.
    pub limit: &'static [NutrientKey],
    /// Reduce when the reading is high.
    pub less: &'static [NutrientKey],
    /// Extra limit-tier triggers for sensitive audiences.
    pub strict: &'static [(NutrientKey, Level)],
}

struct Profile {
    id: AudienceId,
    key: &'static str,
    label: &'static str,
    focus: &'static str,
    rule: AudienceRule,
}

static PROFILES: [Profile; 7] = [
    Profile {
        id: AudienceId::Cholesterol,
        key: "cholesterol",
        label: "High cholesterol",
        focus: "cholesterol and saturated fat; favors fiber and protein",
        rule: AudienceRule {
            more: &[Fiber, Protein],
            limit: &[Calories],
            less: &[Cholesterol, SaturatedFat],
            strict: &[(Cholesterol, Level::Medium), (SaturatedFat, Level::Medium)],
        },
    },
    Profile {
        id: AudienceId::FatLoss,
        key: "fat_loss",
        label: "Fat loss",
        focus: "calories, fat and sugar; favors protein and fiber",
        rule: AudienceRule {
            more: &[Protein, Fiber],
            limit: &[Calories, Sugar],
            less: &[Fat, SaturatedFat, Sugar],
            strict: &[
                (Calories, Level::Medium),
                (Sugar, Level::Medium),
                (Fat, Level::Medium),
            ],
        },
    },
    Profile {
        id: AudienceId::MuscleGain,
        key: "muscle_gain",
        label: "Muscle gain",
        focus: "protein and calories, moderate carbohydrates",
        rule: AudienceRule {
            more: &[Protein, Calories],
            limit: &[Sugar],
            less: &[Fat, SaturatedFat],
            strict: &[],
        },
    },
    Profile {
        id: AudienceId::Diabetes,
        key: "diabetes",
        label: "Diabetes",
        focus: "sugar and calories; favors fiber",
        rule: AudienceRule {
            more: &[Fiber],
            limit: &[Sugar, Calories],
            less: &[Sugar],
            strict: &[],
        },
    },
    Profile {
        id: AudienceId::Children,
        key: "children",
        label: "Children",
        focus: "protein and calcium, moderate sugar and fat",
        rule: AudienceRule {
            more: &[Protein, Calcium],
            limit: &[Sugar],
            less: &[Fat, SaturatedFat],
            strict: &[],
        },
    },
    Profile {
        id: AudienceId::Elderly,
        key: "elderly",
        label: "Elderly",
        focus: "protein and fiber; limits fat and cholesterol",
        rule: AudienceRule {
            more: &[Protein, Fiber],
            limit: &[Calories, Sugar],
            less: &[Fat, SaturatedFat, Cholesterol],
            strict: &[],
        },
    },
    Profile {
        id: AudienceId::Pregnant,
        key: "pregnant",
        label: "Pregnancy",
        focus: "protein, iron and calcium; limits high sugar and high fat",
        rule: AudienceRule {
            more: &[Protein, Iron, Calcium],
            limit: &[Sugar, Fat],
            less: &[SaturatedFat, Cholesterol],
            strict: &[],
        },
    },
];

impl AudienceId {
    pub const ALL: [AudienceId; 7] = [
        AudienceId::Cholesterol,
        AudienceId::FatLoss,
        AudienceId::MuscleGain,
        AudienceId::Diabetes,
        AudienceId::Children,
        AudienceId::Elderly,
        AudienceId::Pregnant,
    ];

    fn profile(self) -> &'static Profile {
        // PROFILES is declared in enum order.
        &PROFILES[self as usize]
    }

    pub fn parse(key: &str) -> Option<Self> {
        PROFILES.iter().find(|p| p.key == key).map(|p| p.id)
    }

    /// Unknown or missing ids resolve to the canonical default.
    pub fn resolve(key: Option<&str>) -> Self {
        key.and_then(Self::parse).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        self.profile().key
    }

    pub fn label(self) -> &'static str {
        self.profile().label
    }

    pub fn focus(self) -> &'static str {
        self.profile().focus
    }

    pub fn rule(self) -> &'static AudienceRule {
        &self.profile().rule
    }
}

impl std::fmt::Display for AudienceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule set for an audience key, falling back to the default audience.
pub fn lookup(audience: &str) -> &'static AudienceRule {
    AudienceId::resolve(Some(audience)).rule()
}

/// Display label for an audience key; unknown keys come back unchanged.
pub fn audience_label(audience: &str) -> String {
    AudienceId::parse(audience)
        .map(|a| a.label().to_string())
        .unwrap_or_else(|| audience.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_follow_enum_order() {
        for (idx, id) in AudienceId::ALL.into_iter().enumerate() {
            assert_eq!(PROFILES[idx].id, id);
            assert_eq!(AudienceId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_keys_match_serde_names() {
        for id in AudienceId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_lookup_unknown_falls_back_to_cholesterol() {
        assert_eq!(lookup("astronaut"), AudienceId::Cholesterol.rule());
        assert_eq!(lookup(""), lookup("cholesterol"));
        assert_eq!(AudienceId::resolve(None), AudienceId::Cholesterol);
        assert_eq!(AudienceId::resolve(Some("diabetes")), AudienceId::Diabetes);
    }

    #[test]
    fn test_diabetes_rule() {
        let rule = lookup("diabetes");
        assert_eq!(rule.more, &[Fiber]);
        assert_eq!(rule.limit, &[Sugar, Calories]);
        assert_eq!(rule.less, &[Sugar]);
        assert!(rule.strict.is_empty());
    }

    #[test]
    fn test_only_cholesterol_and_fat_loss_are_strict() {
        let strict: Vec<_> = AudienceId::ALL
            .into_iter()
            .filter(|a| !a.rule().strict.is_empty())
            .collect();
        assert_eq!(strict, vec![AudienceId::Cholesterol, AudienceId::FatLoss]);
        assert_eq!(
            AudienceId::Cholesterol.rule().strict,
            &[(Cholesterol, Level::Medium), (SaturatedFat, Level::Medium)]
        );
    }

    #[test]
    fn test_audience_label_falls_back_to_raw_id() {
        assert_eq!(audience_label("pregnant"), "Pregnancy");
        assert_eq!(audience_label("fat_loss"), "Fat loss");
        assert_eq!(audience_label("general"), "general");
        assert_eq!(audience_label(" diabetes "), " diabetes ");
        assert_eq!(AudienceId::parse("Diabetes"), None);
        assert_eq!(AudienceId::resolve(Some(" diabetes ")), AudienceId::Cholesterol);
    }
}
