//! REST API endpoints.
//!
//! Axum-based HTTP API translating simplified frontend requests into
//! upstream game-statistics calls.

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::tag::TagError;
use crate::upstream::UpstreamError;
use state::AppState;

/// API error taxonomy.
///
/// Each variant maps to one response shape: validation and configuration
/// problems produce a plain `{"error": ...}` body, upstream failures are
/// forwarded with the upstream status code and a fuller envelope, and
/// anything unexpected becomes an opaque 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Upstream API error (HTTP {status})")]
    Upstream {
        status: u16,
        message: String,
        details: Value,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<TagError> for ApiError {
    fn from(err: TagError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status, body } => {
                // Forward the upstream body when it parses as JSON,
                // otherwise carry it as a plain string.
                let details = serde_json::from_str(&body)
                    .unwrap_or_else(|_| Value::String(body));
                ApiError::Upstream {
                    status,
                    message: "Failed to fetch data from upstream API".to_string(),
                    details,
                }
            }
            other => match other.status_code() {
                Some(status) => ApiError::Upstream {
                    status,
                    message: "Failed to fetch data from upstream API".to_string(),
                    details: Value::Null,
                },
                None => ApiError::Internal(other.to_string()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Configuration(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
            ApiError::Upstream {
                status,
                message,
                details,
            } => {
                let status_code =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let body = json!({
                    "error": "Upstream API error",
                    "message": message,
                    "details": details,
                    "status_code": status,
                });
                (status_code, Json(body)).into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Build the application router with CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.cors_origins);

    Router::new()
        .route("/api/player/:tag", get(routes::players::get_player))
        .route(
            "/api/player/:tag/battlelog",
            get(routes::players::get_battlelog),
        )
        .route(
            "/api/player/:tag/analytics",
            get(routes::players::get_analytics),
        )
        .route(
            "/api/player/:tag/compare/:other",
            get(routes::players::compare_players),
        )
        .route("/api/clubs/:tag", get(routes::clubs::get_club))
        .route("/api/clubs/:tag/members", get(routes::clubs::get_members))
        .route("/api/brawlers", get(routes::brawlers::list_brawlers))
        .route("/api/brawlers/:id", get(routes::brawlers::get_brawler))
        .route(
            "/api/rankings/players",
            get(routes::rankings::player_rankings),
        )
        .route("/api/rankings/clubs", get(routes::rankings::club_rankings))
        .route(
            "/api/rankings/brawlers/:id",
            get(routes::rankings::brawler_rankings),
        )
        .route("/api/events/rotation", get(routes::events::rotation))
        .route("/api/search/players", get(routes::search::search_players))
        .route("/api/search/clubs", get(routes::search::search_clubs))
        .route("/api/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([Method::GET]).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| o.parse::<HeaderValue>().ok())
        .collect();
    layer.allow_origin(AllowOrigin::list(parsed))
}
