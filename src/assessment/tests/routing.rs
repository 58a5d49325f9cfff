use super::common::*;
use crate::assessment::domain::AssessmentSubmission;
use crate::assessment::router::assessment_router;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn score_request(submission: &AssessmentSubmission) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/assessment/score")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(submission).expect("serialize submission"),
        ))
        .expect("request")
}

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn post_score_returns_the_full_result() {
    let router = assessment_router(Arc::new(standard_service()));
    let submission = AssessmentSubmission::new(standard_battery_max());

    let response = router
        .oneshot(score_request(&submission))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;

    assert!(payload.get("attempt_id").is_some());
    assert_eq!(payload.get("answered").and_then(Value::as_u64), Some(15));
    assert_eq!(payload.get("skipped").and_then(Value::as_u64), Some(0));

    let result = payload.get("result").expect("result present");
    assert_eq!(
        result.get("overall_confidence").and_then(Value::as_u64),
        Some(100)
    );
    assert_eq!(
        result.get("recommendation").and_then(Value::as_str),
        Some("yes")
    );
    assert_eq!(
        result
            .get("career_paths")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(4)
    );
}

#[tokio::test]
async fn post_score_rejects_out_of_range_answers() {
    let router = assessment_router(Arc::new(test_service()));
    let submission = AssessmentSubmission::new(vec![rating("psych_a", 9)]);

    let response = router
        .oneshot(score_request(&submission))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("outside"));
}

#[tokio::test]
async fn get_catalog_lists_the_battery() {
    let router = assessment_router(Arc::new(standard_service()));

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/assessment/catalog")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total").and_then(Value::as_u64), Some(15));
    let questions = payload
        .get("questions")
        .and_then(Value::as_array)
        .expect("questions array");
    assert_eq!(questions.len(), 15);
    assert_eq!(
        questions[0].get("id").and_then(Value::as_str),
        Some("psych_1")
    );
}
