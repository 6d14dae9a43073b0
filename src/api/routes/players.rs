use axum::extract::{Path, State};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::analytics::{self, PerformanceSummary};
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::format::decorate;
use crate::tag::Tag;

/// GET /api/player/:tag
pub async fn get_player(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let tag = Tag::parse(&tag)?;
    let player = state
        .upstream()?
        .fetch(&format!("/players/{}", tag.encoded()))
        .await?;
    Ok(Json(decorate(&player)))
}

/// GET /api/player/:tag/battlelog
pub async fn get_battlelog(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let tag = Tag::parse(&tag)?;
    let battlelog = state
        .upstream()?
        .fetch(&format!("/players/{}/battlelog", tag.encoded()))
        .await?;
    Ok(Json(decorate(&battlelog)))
}

// ── Analytics Endpoint ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PlayerInfo {
    pub tag: String,
    pub name: String,
    pub trophies: i64,
    pub exp_level: i64,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub player: PlayerInfo,
    pub performance: PerformanceSummary,
    /// Win rate over the full battle log, not just the recent window.
    pub overall_win_rate: f64,
    pub retrieved_at: String,
}

/// GET /api/player/:tag/analytics
///
/// Fetches the player profile and battle log, then derives the performance
/// summary. A battle-log failure degrades to an empty log rather than
/// failing the request; a profile failure aborts.
pub async fn get_analytics(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let tag = Tag::parse(&tag)?;
    let upstream = state.upstream()?;

    let player = upstream
        .fetch(&format!("/players/{}", tag.encoded()))
        .await?;

    let battles: Vec<Value> = match upstream
        .fetch(&format!("/players/{}/battlelog", tag.encoded()))
        .await
    {
        Ok(battlelog) => battlelog["items"].as_array().cloned().unwrap_or_default(),
        Err(e) => {
            warn!("Battle log unavailable for {}: {}", tag, e);
            Vec::new()
        }
    };

    Ok(Json(AnalyticsResponse {
        player: PlayerInfo {
            tag: player["tag"].as_str().unwrap_or_default().to_string(),
            name: player["name"].as_str().unwrap_or_default().to_string(),
            trophies: player["trophies"].as_i64().unwrap_or(0),
            exp_level: player["expLevel"].as_i64().unwrap_or(0),
        },
        performance: analytics::summarize(&battles),
        overall_win_rate: analytics::win_rate_over_all(&battles),
        retrieved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    }))
}

/// GET /api/player/:tag/compare/:other
pub async fn compare_players(
    State(state): State<AppState>,
    Path((tag, other)): Path<(String, String)>,
) -> Result<Json<analytics::Comparison>, ApiError> {
    let tag = Tag::parse(&tag)?;
    let other = Tag::parse(&other)?;
    let upstream = state.upstream()?;

    let player_a = upstream
        .fetch(&format!("/players/{}", tag.encoded()))
        .await?;
    let player_b = upstream
        .fetch(&format!("/players/{}", other.encoded()))
        .await?;

    Ok(Json(analytics::compare(&player_a, &player_b)))
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{get_json, test_state, unconfigured_state, MockUpstream};
    use crate::api::build_router;
    use axum::http::StatusCode;
    use serde_json::json;

    fn battle(result: &str, mode: &str) -> serde_json::Value {
        json!({
            "battle": {
                "mode": mode,
                "result": result,
                "starPlayer": {"brawler": {"name": "SPIKE"}}
            }
        })
    }

    #[tokio::test]
    async fn test_get_player_formats_response() {
        let mock = MockUpstream::new().with_response(
            "/players/%239LUU9RR",
            json!({"tag": "#9LUU9RR", "name": "Spike", "trophies": 31250}),
        );
        let app = build_router(test_state(mock));
        let (status, body) = get_json(app, "/api/player/9luu9rr").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Spike");
        assert_eq!(body["display_tag"], "#9LUU9RR");
        assert_eq!(body["trophies_formatted"], "31,250");
        assert!(body["retrieved_at"].is_string());
    }

    #[tokio::test]
    async fn test_get_player_invalid_tag() {
        let app = build_router(test_state(MockUpstream::new()));
        let (status, body) = get_json(app, "/api/player/INVALIDTAG!").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("invalid characters"));
    }

    #[tokio::test]
    async fn test_get_player_upstream_404_forwarded() {
        let mock = MockUpstream::new().with_failure("/players/%23ABC123", 404);
        let app = build_router(test_state(mock));
        let (status, body) = get_json(app, "/api/player/abc123").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Upstream API error");
        assert_eq!(body["status_code"], 404);
        assert_eq!(body["details"]["reason"], "notFound");
    }

    #[tokio::test]
    async fn test_get_player_missing_credential() {
        let app = build_router(unconfigured_state());
        let (status, body) = get_json(app, "/api/player/abc123").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("credential"));
    }

    #[tokio::test]
    async fn test_get_battlelog() {
        let mock = MockUpstream::new().with_response(
            "/players/%23ABC123/battlelog",
            json!({"items": [battle("victory", "gemGrab")]}),
        );
        let app = build_router(test_state(mock));
        let (status, body) = get_json(app, "/api/player/abc123/battlelog").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
        assert!(body["retrieved_at"].is_string());
    }

    #[tokio::test]
    async fn test_analytics() {
        let mock = MockUpstream::new()
            .with_response(
                "/players/%23ABC123",
                json!({"tag": "#ABC123", "name": "Spike", "trophies": 500, "expLevel": 42}),
            )
            .with_response(
                "/players/%23ABC123/battlelog",
                json!({"items": [
                    battle("victory", "gemGrab"),
                    battle("victory", "gemGrab"),
                    battle("defeat", "heist"),
                ]}),
            );
        let app = build_router(test_state(mock));
        let (status, body) = get_json(app, "/api/player/abc123/analytics").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["player"]["name"], "Spike");
        assert_eq!(body["player"]["exp_level"], 42);
        assert_eq!(body["performance"]["total_battles"], 3);
        assert_eq!(body["performance"]["wins"], 2);
        assert_eq!(body["performance"]["win_rate"], 66.67);
        assert_eq!(body["performance"]["most_played_mode"], "gemGrab");
        assert_eq!(body["overall_win_rate"], 66.67);
    }

    #[tokio::test]
    async fn test_analytics_battlelog_failure_degrades() {
        let mock = MockUpstream::new()
            .with_response(
                "/players/%23ABC123",
                json!({"tag": "#ABC123", "name": "Spike", "trophies": 500, "expLevel": 42}),
            )
            .with_failure("/players/%23ABC123/battlelog", 404);
        let app = build_router(test_state(mock));
        let (status, body) = get_json(app, "/api/player/abc123/analytics").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["performance"]["total_battles"], 0);
        assert_eq!(body["performance"]["win_rate"], 0.0);
    }

    #[tokio::test]
    async fn test_analytics_player_failure_aborts() {
        let mock = MockUpstream::new().with_failure("/players/%23ABC123", 404);
        let app = build_router(test_state(mock));
        let (status, body) = get_json(app, "/api/player/abc123/analytics").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status_code"], 404);
    }

    #[tokio::test]
    async fn test_compare() {
        let mock = MockUpstream::new()
            .with_response(
                "/players/%23AAA111",
                json!({"name": "Alice", "tag": "#AAA111", "trophies": 12000, "expLevel": 120,
                       "brawlers": [{}, {}]}),
            )
            .with_response(
                "/players/%23BBB222",
                json!({"name": "Bob", "tag": "#BBB222", "trophies": 10000, "expLevel": 130,
                       "brawlers": [{}]}),
            );
        let app = build_router(test_state(mock));
        let (status, body) = get_json(app, "/api/player/aaa111/compare/bbb222").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["trophy_difference"], 2000);
        assert_eq!(body["level_difference"], -10);
        assert_eq!(body["brawler_count_difference"], 1);
        assert_eq!(body["higher_trophies"], "Alice");
        assert_eq!(body["higher_level"], "Bob");
    }

    #[tokio::test]
    async fn test_compare_tie_credits_second_player() {
        let mock = MockUpstream::new()
            .with_response(
                "/players/%23AAA111",
                json!({"name": "Alice", "trophies": 100, "expLevel": 10}),
            )
            .with_response(
                "/players/%23BBB222",
                json!({"name": "Bob", "trophies": 100, "expLevel": 10}),
            );
        let app = build_router(test_state(mock));
        let (status, body) = get_json(app, "/api/player/aaa111/compare/bbb222").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["higher_trophies"], "Bob");
        assert_eq!(body["higher_level"], "Bob");
    }

    #[tokio::test]
    async fn test_compare_invalid_second_tag() {
        let app = build_router(test_state(MockUpstream::new()));
        let (status, _) = get_json(app, "/api/player/aaa111/compare/x").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
