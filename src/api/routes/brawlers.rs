use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::api::state::AppState;
use crate::api::ApiError;

/// GET /api/brawlers
pub async fn list_brawlers(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let brawlers = state.upstream()?.fetch("/brawlers").await?;
    Ok(Json(brawlers))
}

/// GET /api/brawlers/:id
pub async fn get_brawler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    let brawler = state
        .upstream()?
        .fetch(&format!("/brawlers/{}", id))
        .await?;
    Ok(Json(brawler))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::test_support::{get_json, test_state, MockUpstream};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_brawlers() {
        let mock = MockUpstream::new()
            .with_response("/brawlers", json!({"items": [{"id": 16000000, "name": "SHELLY"}]}));
        let app = build_router(test_state(mock));
        let (status, body) = get_json(app, "/api/brawlers").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"][0]["name"], "SHELLY");
    }

    #[tokio::test]
    async fn test_get_brawler() {
        let mock = MockUpstream::new()
            .with_response("/brawlers/16000005", json!({"id": 16000005, "name": "SPIKE"}));
        let app = build_router(test_state(mock));
        let (status, body) = get_json(app, "/api/brawlers/16000005").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "SPIKE");
    }

    #[tokio::test]
    async fn test_get_brawler_upstream_404() {
        let mock = MockUpstream::new().with_failure("/brawlers/1", 404);
        let app = build_router(test_state(mock));
        let (status, body) = get_json(app, "/api/brawlers/1").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status_code"], 404);
    }
}
