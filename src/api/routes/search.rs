use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::api::state::AppState;
use crate::api::ApiError;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub limit: Option<u32>,
}

impl SearchParams {
    /// The `name` query parameter is mandatory for search routes.
    fn require_name(&self) -> Result<&str, ApiError> {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(ApiError::Validation(
                "Query parameter 'name' is required".to_string(),
            )),
        }
    }

    fn query_string(&self, name: &str) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("name", name);
        if let Some(limit) = self.limit {
            serializer.append_pair("limit", &limit.to_string());
        }
        serializer.finish()
    }
}

/// GET /api/search/players?name=&limit=
pub async fn search_players(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ApiError> {
    let name = params.require_name()?;
    let results = state
        .upstream()?
        .fetch(&format!("/players?{}", params.query_string(name)))
        .await?;
    Ok(Json(results))
}

/// GET /api/search/clubs?name=&limit=
pub async fn search_clubs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ApiError> {
    let name = params.require_name()?;
    let results = state
        .upstream()?
        .fetch(&format!("/clubs?{}", params.query_string(name)))
        .await?;
    Ok(Json(results))
}
