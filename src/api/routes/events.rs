use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::state::AppState;
use crate::api::ApiError;

/// GET /api/events/rotation
pub async fn rotation(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let events = state.upstream()?.fetch("/events/rotation").await?;
    Ok(Json(events))
}
