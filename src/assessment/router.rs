use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::info;

use super::domain::AssessmentSubmission;
use super::service::AssessmentService;

/// Router builder exposing the assessment scoring API.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessment/score", post(score_handler))
        .route("/api/v1/assessment/catalog", get(catalog_handler))
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response {
    match service.score(submission) {
        Ok(attempt) => {
            info!(
                attempt = %attempt.attempt_id.0,
                recommendation = attempt.result.recommendation.label(),
                confidence = attempt.result.overall_confidence,
                skipped = attempt.skipped,
                "assessment scored"
            );
            (StatusCode::OK, axum::Json(attempt)).into_response()
        }
        Err(violation) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn catalog_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    let payload = json!({
        "total": service.catalog().len(),
        "questions": service.catalog().questions(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
