use serde::{Deserialize, Serialize};

use crate::audience::AudienceRule;
use crate::nutrition::{Food, Level, NutrientKey};

/// Suggestion buckets, in evaluation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    More,
    Limit,
    Less,
}

impl Tier {
    pub const ORDER: [Tier; 3] = [Tier::More, Tier::Limit, Tier::Less];

    /// Reasons `food` qualifies for this tier under `rule`; empty when it
    /// does not.
    fn reasons(self, rule: &AudienceRule, food: &Food) -> Vec<String> {
        match self {
            Tier::More => matching(food, rule.more, Level::Low),
            Tier::Limit => {
                let mut reasons = matching(food, rule.limit, Level::Medium);
                reasons.extend(
                    rule.strict
                        .iter()
                        .filter(|(nutrient, level)| food.level(*nutrient) == Some(*level))
                        .map(|(nutrient, level)| strict_reason(*nutrient, *level)),
                );
                reasons
            }
            Tier::Less => matching(food, rule.less, Level::High),
        }
    }
}

fn matching(food: &Food, watched: &[NutrientKey], level: Level) -> Vec<String> {
    watched
        .iter()
        .filter(|n| food.level(**n) == Some(level))
        .map(|n| level_reason(*n, level))
        .collect()
}

fn level_reason(nutrient: NutrientKey, level: Level) -> String {
    match level {
        Level::Low => format!("{} is low", nutrient.label()),
        Level::Medium => format!("{} is moderate", nutrient.label()),
        Level::High => format!("{} is high", nutrient.label()),
    }
}

fn strict_reason(nutrient: NutrientKey, level: Level) -> String {
    match level {
        Level::Medium => format!("{} elevated", nutrient.label()),
        other => level_reason(nutrient, other),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketEntry {
    #[serde(rename = "name")]
    pub food_name: String,
    pub reasons: Vec<String>,
}

/// Foods split by tier, each list in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub more: Vec<BucketEntry>,
    pub limit: Vec<BucketEntry>,
    pub less: Vec<BucketEntry>,
}

impl Classification {
    pub fn bucket(&self, tier: Tier) -> &[BucketEntry] {
        match tier {
            Tier::More => &self.more,
            Tier::Limit => &self.limit,
            Tier::Less => &self.less,
        }
    }

    fn bucket_mut(&mut self, tier: Tier) -> &mut Vec<BucketEntry> {
        match tier {
            Tier::More => &mut self.more,
            Tier::Limit => &mut self.limit,
            Tier::Less => &mut self.less,
        }
    }

    /// Tiers holding an entry named `food_name`.
    pub fn tiers_of(&self, food_name: &str) -> Vec<Tier> {
        Tier::ORDER
            .into_iter()
            .filter(|t| self.bucket(*t).iter().any(|e| e.food_name == food_name))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.more.is_empty() && self.limit.is_empty() && self.less.is_empty()
    }
}

/// Places each food in the first tier that yields a reason. Foods with no
/// reason in any tier are left out.
pub fn classify(rule: &AudienceRule, foods: &[Food]) -> Classification {
    let mut out = Classification::default();
    for food in foods {
        let placed = Tier::ORDER.into_iter().find_map(|tier| {
            let reasons = tier.reasons(rule, food);
            (!reasons.is_empty()).then_some((tier, reasons))
        });
        if let Some((tier, reasons)) = placed {
            out.bucket_mut(tier).push(BucketEntry {
                food_name: food.name.clone(),
                reasons,
            });
        }
    }
    out
}
