use crate::config::ScoringConfig;
use crate::scoring::{scoring_router, Profile, RangePolicy};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < TOLERANCE
}

/// Mixed profile with two metrics below baseline (RPC and PR).
pub(super) fn mixed_profile() -> Profile {
    Profile::new(60.0, 40.0, 70.0, 55.0, 20.0)
}

/// Every metric below its baseline, so deficits alone fill the list.
pub(super) fn struggling_profile() -> Profile {
    Profile::new(30.0, 20.0, 40.0, 30.0, 25.0)
}

pub(super) fn router(policy: RangePolicy) -> axum::Router {
    scoring_router(ScoringConfig {
        range_policy: policy,
    })
}

pub(super) fn predict_request(body: &str) -> Request<Body> {
    Request::post(crate::scoring::router::PREDICT_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
