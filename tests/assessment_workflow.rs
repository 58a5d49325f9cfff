//! Integration specifications for the assessment scoring workflow.
//!
//! Scenarios drive the public service facade and HTTP router end to end so
//! intake validation, scoring, and response-log ingestion are exercised
//! without reaching into private modules.

mod common {
    use std::sync::Arc;

    use readiness_ai::assessment::{
        AssessmentResponse, AssessmentService, QuestionCatalog, QuestionId, RawAnswer,
        ScoringEngine,
    };

    pub(super) fn response(id: &str, answer: impl Into<RawAnswer>) -> AssessmentResponse {
        AssessmentResponse {
            question_id: QuestionId::from(id),
            answer: answer.into(),
            time_spent_ms: 1500,
        }
    }

    /// Maximum-favorable answers for the built-in battery.
    pub(super) fn full_battery() -> Vec<AssessmentResponse> {
        vec![
            response("psych_1", 5u32),
            response("psych_2", 5u32),
            response("psych_3", 5u32),
            response("psych_4", 5u32),
            response("psych_5", 3u32),
            response("tech_1", 0u32),
            response("tech_2", 1u32),
            response("tech_3", 1u32),
            response("tech_4", 0u32),
            response("wiscar_will_1", 5u32),
            response("wiscar_interest_1", 5u32),
            response("wiscar_skill_1", 3u32),
            response("wiscar_cognitive_1", 0u32),
            response("wiscar_ability_1", 5u32),
            response("wiscar_real_world_1", 3u32),
        ]
    }

    pub(super) fn build_service() -> AssessmentService {
        AssessmentService::new(
            Arc::new(QuestionCatalog::standard()),
            ScoringEngine::default(),
        )
    }
}

mod scoring {
    use super::common::*;
    use readiness_ai::assessment::{AssessmentSubmission, IntakeViolation, Recommendation};

    #[test]
    fn full_battery_scores_a_yes_recommendation() {
        let service = build_service();
        let attempt = service
            .score(AssessmentSubmission::new(full_battery()))
            .expect("complete battery scores");

        assert_eq!(attempt.answered, 15);
        assert_eq!(attempt.skipped, 0);
        assert_eq!(attempt.result.overall_confidence, 100);
        assert_eq!(attempt.result.recommendation, Recommendation::Yes);
        assert_eq!(attempt.result.next_steps.len(), 4);
    }

    #[test]
    fn partial_submissions_with_unknown_ids_still_score() {
        let service = build_service();
        let mut responses = vec![response("psych_1", 5u32)];
        responses.push(response("retired_question", 2u32));

        let attempt = service
            .score(AssessmentSubmission::new(responses))
            .expect("permissive intake tolerates unknown ids");

        assert_eq!(attempt.answered, 1);
        assert_eq!(attempt.skipped, 1);
        assert_eq!(attempt.result.psychometric_score, 100);
        assert_eq!(attempt.result.technical_score, 0);
        assert_eq!(attempt.result.recommendation, Recommendation::No);
    }

    #[test]
    fn out_of_range_answers_fail_the_submission() {
        let service = build_service();
        let responses = vec![response("psych_1", 7u32)];

        let error = service
            .score(AssessmentSubmission::new(responses))
            .expect_err("out-of-scale rating rejected");
        assert!(matches!(error, IntakeViolation::RatingOutOfRange { .. }));
    }

    #[test]
    fn scoring_is_deterministic_across_attempts() {
        let service = build_service();

        let first = service
            .score(AssessmentSubmission::new(full_battery()))
            .expect("scores");
        let second = service
            .score(AssessmentSubmission::new(full_battery()))
            .expect("scores");

        // Attempt ids differ; the derived result must not.
        assert_ne!(first.attempt_id, second.attempt_id);
        assert_eq!(
            serde_json::to_string(&first.result).expect("serialize"),
            serde_json::to_string(&second.result).expect("serialize"),
        );
    }
}

mod import {
    use super::common::*;
    use readiness_ai::assessment::{AssessmentSubmission, Recommendation, ResponseLog};
    use std::io::Cursor;

    #[test]
    fn csv_log_feeds_the_scoring_pipeline() {
        let csv = "question_id,answer,time_spent_ms\n\
psych_1,5,1200\n\
psych_2,5,1100\n\
psych_3,5,900\n\
psych_4,5,1000\n\
psych_5,3,1300\n\
tech_1,0,2100\n\
tech_2,1,1900\n\
tech_3,1,1700\n\
tech_4,0,2400\n\
wiscar_will_1,5,800\n\
wiscar_interest_1,5,700\n\
wiscar_skill_1,3,900\n\
wiscar_cognitive_1,0,2000\n\
wiscar_ability_1,5,700\n\
wiscar_real_world_1,3,800\n";

        let responses = ResponseLog::from_csv_reader(Cursor::new(csv)).expect("log parses");
        assert_eq!(responses.len(), 15);

        let service = build_service();
        let attempt = service
            .score(AssessmentSubmission::new(responses))
            .expect("imported log scores");

        assert_eq!(attempt.result.overall_confidence, 100);
        assert_eq!(attempt.result.recommendation, Recommendation::Yes);
    }

    #[test]
    fn json_log_round_trips_through_serde() {
        let responses = full_battery();
        let json = serde_json::to_vec(&responses).expect("serialize log");

        let parsed = ResponseLog::from_json_reader(json.as_slice()).expect("json parses");
        assert_eq!(parsed, responses);
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use readiness_ai::assessment::{assessment_router, AssessmentSubmission};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn post_score_round_trips_over_http() {
        let router = assessment_router(Arc::new(build_service()));
        let submission = AssessmentSubmission::new(full_battery());

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assessment/score")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&submission).expect("serialize submission"),
            ))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");

        let result = payload.get("result").expect("result present");
        assert_eq!(
            result.get("recommendation").and_then(Value::as_str),
            Some("yes")
        );
        let careers = result
            .get("career_paths")
            .and_then(Value::as_array)
            .expect("career paths present");
        let fits: Vec<f64> = careers
            .iter()
            .filter_map(|path| path.get("fit_score").and_then(Value::as_f64))
            .collect();
        assert_eq!(fits.len(), 4);
        assert!(fits.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[tokio::test]
    async fn get_catalog_exposes_the_battery_for_collaborating_uis() {
        let router = assessment_router(Arc::new(build_service()));

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
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.get("total").and_then(Value::as_u64), Some(15));
    }
}
