use std::sync::Arc;

use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::{
    AssessmentResponse, LikertScale, Question, QuestionCategory, QuestionFormat, QuestionId,
    QuestionKind, RawAnswer, ScoredResponse, Section, WiscarDimension,
};
use crate::assessment::intake::ResponseIntake;
use crate::assessment::scoring::ScoringEngine;
use crate::assessment::service::AssessmentService;

pub(super) fn likert_question(
    id: &str,
    section: Section,
    category: QuestionCategory,
    weight: f32,
) -> Question {
    Question {
        id: QuestionId::from(id),
        kind: QuestionKind::Likert,
        section,
        category,
        prompt: format!("Prompt for {id}"),
        format: QuestionFormat::Likert {
            scale: LikertScale::one_to_five([
                "Strongly Disagree",
                "Disagree",
                "Neutral",
                "Agree",
                "Strongly Agree",
            ]),
        },
        weight,
    }
}

pub(super) fn choice_question(
    id: &str,
    section: Section,
    category: QuestionCategory,
    correct: Option<usize>,
    weight: f32,
) -> Question {
    Question {
        id: QuestionId::from(id),
        kind: QuestionKind::MultipleChoice,
        section,
        category,
        prompt: format!("Prompt for {id}"),
        format: QuestionFormat::Choice {
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            correct,
        },
        weight,
    }
}

/// Compact battery: two psychometric likerts, two objective technical
/// questions, one likert per WISCAR dimension, all weight 1.0.
pub(super) fn test_catalog() -> QuestionCatalog {
    let mut questions = vec![
        likert_question(
            "psych_a",
            Section::Psychometric,
            QuestionCategory::from("interest"),
            1.0,
        ),
        likert_question(
            "psych_b",
            Section::Psychometric,
            QuestionCategory::from("persistence"),
            1.0,
        ),
        choice_question(
            "tech_a",
            Section::Technical,
            QuestionCategory::from("fundamentals"),
            Some(0),
            1.0,
        ),
        choice_question(
            "tech_b",
            Section::Technical,
            QuestionCategory::from("fundamentals"),
            Some(0),
            1.0,
        ),
    ];

    for dimension in WiscarDimension::ALL {
        questions.push(likert_question(
            &format!("wiscar_{}", dimension.key()),
            Section::Wiscar,
            QuestionCategory::from(dimension),
            1.0,
        ));
    }

    QuestionCatalog::new(questions).expect("test battery is valid")
}

pub(super) fn rating(id: &str, value: u32) -> AssessmentResponse {
    AssessmentResponse {
        question_id: QuestionId::from(id),
        answer: RawAnswer::from(value),
        time_spent_ms: 1000,
    }
}

pub(super) fn choice_answer(id: &str, index: u32) -> AssessmentResponse {
    AssessmentResponse {
        question_id: QuestionId::from(id),
        answer: RawAnswer::from(index),
        time_spent_ms: 1000,
    }
}

pub(super) fn wiscar_ratings(value: u32) -> Vec<AssessmentResponse> {
    WiscarDimension::ALL
        .iter()
        .map(|dimension| rating(&format!("wiscar_{}", dimension.key()), value))
        .collect()
}

/// 50% psychometric, 50% technical, 100% on every WISCAR dimension:
/// overall confidence 65, recommendation `maybe` with both sections weak.
pub(super) fn maybe_profile_responses() -> Vec<AssessmentResponse> {
    let mut responses = vec![
        rating("psych_a", 2),
        rating("psych_b", 3),
        choice_answer("tech_a", 0),
        choice_answer("tech_b", 1),
    ];
    responses.extend(wiscar_ratings(5));
    responses
}

/// Maximum-favorable answers for the standard 15-question battery.
pub(super) fn standard_battery_max() -> Vec<AssessmentResponse> {
    vec![
        rating("psych_1", 5),
        rating("psych_2", 5),
        rating("psych_3", 5),
        rating("psych_4", 5),
        choice_answer("psych_5", 3),
        choice_answer("tech_1", 0),
        choice_answer("tech_2", 1),
        choice_answer("tech_3", 1),
        choice_answer("tech_4", 0),
        rating("wiscar_will_1", 5),
        rating("wiscar_interest_1", 5),
        choice_answer("wiscar_skill_1", 3),
        choice_answer("wiscar_cognitive_1", 0),
        rating("wiscar_ability_1", 5),
        choice_answer("wiscar_real_world_1", 3),
    ]
}

pub(super) fn resolved(
    catalog: &QuestionCatalog,
    responses: &[AssessmentResponse],
) -> Vec<ScoredResponse> {
    ResponseIntake
        .resolve(catalog, responses)
        .expect("fixture responses are valid")
}

pub(super) fn test_service() -> AssessmentService {
    AssessmentService::new(Arc::new(test_catalog()), ScoringEngine::default())
}

pub(super) fn standard_service() -> AssessmentService {
    AssessmentService::new(
        Arc::new(QuestionCatalog::standard()),
        ScoringEngine::default(),
    )
}
