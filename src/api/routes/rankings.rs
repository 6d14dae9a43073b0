use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::api::state::AppState;
use crate::api::ApiError;

#[derive(Debug, Deserialize)]
pub struct RankingParams {
    /// Two-letter country code; upstream accepts `global` as well.
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
}

impl RankingParams {
    fn country(&self) -> &str {
        self.country_code.as_deref().unwrap_or("global")
    }
}

/// GET /api/rankings/players
pub async fn player_rankings(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> Result<Json<Value>, ApiError> {
    let rankings = state
        .upstream()?
        .fetch(&format!("/rankings/{}/players", params.country()))
        .await?;
    Ok(Json(rankings))
}

/// GET /api/rankings/clubs
pub async fn club_rankings(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> Result<Json<Value>, ApiError> {
    let rankings = state
        .upstream()?
        .fetch(&format!("/rankings/{}/clubs", params.country()))
        .await?;
    Ok(Json(rankings))
}

/// GET /api/rankings/brawlers/:id
pub async fn brawler_rankings(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Query<RankingParams>,
) -> Result<Json<Value>, ApiError> {
    let rankings = state
        .upstream()?
        .fetch(&format!("/rankings/{}/brawlers/{}", params.country(), id))
        .await?;
    Ok(Json(rankings))
}
