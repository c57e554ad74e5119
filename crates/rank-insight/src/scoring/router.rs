use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::{debug, warn};

use super::domain::Profile;
use super::engine::Scorer;
use crate::config::ScoringConfig;

pub const PREDICT_PATH: &str = "/api/v1/predict";

/// Router builder exposing the prediction endpoint.
///
/// Malformed bodies (missing metrics, non-numeric values) are refused by the
/// JSON extractor before the scorer runs.
pub fn scoring_router(config: ScoringConfig) -> Router {
    Router::new()
        .route(PREDICT_PATH, post(predict_handler))
        .with_state(config)
}

pub(crate) async fn predict_handler(
    State(config): State<ScoringConfig>,
    Json(profile): Json<Profile>,
) -> Response {
    if let Err(error) = profile.check(config.range_policy) {
        warn!(%error, policy = config.range_policy.label(), "rejected profile");
        let payload = json!({ "error": error.to_string() });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    let result = Scorer::new().compute(&profile);
    debug!(
        score = result.predicted_score,
        rank_min = result.rank_range_min,
        rank_max = result.rank_range_max,
        "scored profile"
    );

    (StatusCode::OK, Json(result)).into_response()
}
