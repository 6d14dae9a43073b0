use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::tag::Tag;

/// GET /api/clubs/:tag
pub async fn get_club(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let tag = Tag::parse(&tag)?;
    let club = state
        .upstream()?
        .fetch(&format!("/clubs/{}", tag.encoded()))
        .await?;
    Ok(Json(club))
}

/// GET /api/clubs/:tag/members
pub async fn get_members(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let tag = Tag::parse(&tag)?;
    let members = state
        .upstream()?
        .fetch(&format!("/clubs/{}/members", tag.encoded()))
        .await?;
    Ok(Json(members))
}
