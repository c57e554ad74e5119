use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tower::ServiceExt;

use crate::config::ScoringConfig;
use crate::scoring::router::predict_handler;
use crate::scoring::{Profile, RangePolicy};

#[tokio::test]
async fn predict_route_returns_wire_shape() {
    let response = router(RangePolicy::Accept)
        .oneshot(predict_request(r#"{"TLR":60,"RPC":40,"GO":70,"OI":55,"PR":20}"#))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    assert!(approx_eq(body["predicted_score"].as_f64().expect("number"), 53.5));
    assert_eq!(body["rank_range_min"], 487);
    assert_eq!(body["rank_range_max"], 619);
    let shap = body["shap_values"].as_object().expect("shap map");
    assert_eq!(shap.len(), 5);
    assert!(approx_eq(shap["PR"].as_f64().expect("number"), -3.0));
    assert_eq!(body["recommendations"].as_array().expect("array").len(), 4);
    assert!(body.get("rank").is_none());
}

#[tokio::test]
async fn predict_route_rejects_missing_metrics() {
    let response = router(RangePolicy::Accept)
        .oneshot(predict_request(r#"{"TLR":60,"RPC":40,"GO":70,"OI":55}"#))
        .await
        .expect("router responds");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn predict_route_rejects_non_numeric_metrics() {
    let response = router(RangePolicy::Accept)
        .oneshot(predict_request(
            r#"{"TLR":"sixty","RPC":40,"GO":70,"OI":55,"PR":20}"#,
        ))
        .await
        .expect("router responds");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn accept_policy_scores_out_of_range_profiles() {
    let response = router(RangePolicy::Accept)
        .oneshot(predict_request(r#"{"TLR":140,"RPC":40,"GO":70,"OI":55,"PR":-20}"#))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn reject_policy_returns_unprocessable_entity() {
    let response = predict_handler(
        State(ScoringConfig {
            range_policy: RangePolicy::Reject,
        }),
        Json(Profile::new(140.0, 40.0, 70.0, 55.0, 20.0)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"], "TLR must lie within [0, 100] (found 140)");
}
