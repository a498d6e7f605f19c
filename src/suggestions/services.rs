use tracing::debug;

use super::classifier::{classify, Classification};
use super::dto::Suggestions;
use crate::audience::AudienceId;
use crate::nutrition::NutritionResult;

/// Resolves the audience (missing or unknown → default) and classifies the
/// result's foods for it.
pub fn classify_for(audience: Option<&str>, result: &NutritionResult) -> Suggestions {
    let resolved = AudienceId::resolve(audience);
    if let Some(requested) = audience {
        if AudienceId::parse(requested).is_none() {
            debug!(requested, fallback = %resolved, "unknown audience; using default");
        }
    }

    let Classification { more, limit, less } = classify(resolved.rule(), &result.foods);
    debug!(
        audience = %resolved,
        foods = result.foods.len(),
        more = more.len(),
        limit = limit.len(),
        less = less.len(),
        "classified foods"
    );

    Suggestions {
        audience: resolved,
        audience_label: resolved.label(),
        focus: resolved.focus(),
        more,
        limit,
        less,
    }
}
