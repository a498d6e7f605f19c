use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{AudienceItem, AudienceQuery, NutrientItem, SuggestRequest, Suggestions};
use super::services::classify_for;
use crate::{
    audience::AudienceId,
    errors::ApiError,
    nutrition::{AnalysisEnvelope, NutrientKey},
    state::AppState,
};

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/audiences", get(list_audiences))
        .route("/nutrients", get(list_nutrients))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/suggestions", post(suggest))
        .route("/suggestions/analysis", post(suggest_from_analysis))
}

// --- handlers ---

pub async fn list_audiences() -> Json<Vec<AudienceItem>> {
    Json(AudienceId::ALL.into_iter().map(AudienceItem::from).collect())
}

pub async fn list_nutrients() -> Json<Vec<NutrientItem>> {
    Json(
        NutrientKey::ALL
            .into_iter()
            .map(|key| NutrientItem {
                key,
                label: key.label(),
            })
            .collect(),
    )
}

/// POST /suggestions { audience?: "diabetes", nutrition_data: { foods: [...] } }
#[instrument(skip_all)]
pub async fn suggest(
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<Suggestions>, ApiError> {
    let Json(req) = payload?;
    let suggestions = classify_for(req.audience.as_deref(), &req.nutrition_data);
    info!(
        audience = %suggestions.audience,
        foods = req.nutrition_data.foods.len(),
        "suggestions built"
    );
    Ok(Json(suggestions))
}

/// POST /suggestions/analysis?audience=.. with the analysis service response
/// as body: { success, nutrition_data, error }
#[instrument(skip_all)]
pub async fn suggest_from_analysis(
    query: Result<Query<AudienceQuery>, QueryRejection>,
    payload: Result<Json<AnalysisEnvelope>, JsonRejection>,
) -> Result<Json<Suggestions>, ApiError> {
    let Query(query) = query?;
    let Json(envelope) = payload?;
    let result = envelope.into_result()?;
    let suggestions = classify_for(query.audience.as_deref(), &result);
    info!(
        audience = %suggestions.audience,
        foods = result.foods.len(),
        "suggestions built from analysis response"
    );
    Ok(Json(suggestions))
}
