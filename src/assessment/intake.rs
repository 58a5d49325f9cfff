use std::collections::HashSet;

use super::catalog::QuestionCatalog;
use super::domain::{
    AnswerValue, AssessmentResponse, QuestionFormat, QuestionId, RawAnswer, ScoredResponse,
};

/// Validation errors raised while resolving submitted answers against the
/// catalog.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("question '{id}' was answered more than once")]
    RepeatedQuestion { id: String },
    #[error("answer for '{id}' is not numeric: '{raw}'")]
    NonNumericAnswer { id: String, raw: String },
    #[error("rating for '{id}' must be a whole number, got {value}")]
    FractionalRating { id: String, value: f64 },
    #[error("rating {rating} for '{id}' is outside the {min}..{max} scale")]
    RatingOutOfRange {
        id: String,
        rating: i64,
        min: u8,
        max: u8,
    },
    #[error("choice for '{id}' must be a non-negative whole index, got {value}")]
    InvalidChoiceIndex { id: String, value: f64 },
    #[error("choice {index} for '{id}' is out of bounds ({available} options)")]
    ChoiceOutOfBounds {
        id: String,
        index: i64,
        available: usize,
    },
}

/// Boundary guard resolving raw responses into typed, in-range answers.
///
/// Responses naming a question id absent from the catalog are skipped, not
/// rejected; tolerating partial and out-of-order submissions is part of the
/// contract. Everything that does match a question is validated strictly:
/// out-of-range values fail the whole submission instead of skewing the
/// aggregates.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseIntake;

impl ResponseIntake {
    pub fn resolve(
        &self,
        catalog: &QuestionCatalog,
        responses: &[AssessmentResponse],
    ) -> Result<Vec<ScoredResponse>, IntakeViolation> {
        let mut seen: HashSet<&QuestionId> = HashSet::new();
        let mut resolved = Vec::with_capacity(responses.len());

        for response in responses {
            let Some(question) = catalog.question(&response.question_id) else {
                continue;
            };

            if !seen.insert(&question.id) {
                return Err(IntakeViolation::RepeatedQuestion {
                    id: question.id.0.clone(),
                });
            }

            let value = response.answer.as_number().ok_or_else(|| {
                IntakeViolation::NonNumericAnswer {
                    id: question.id.0.clone(),
                    raw: raw_answer_text(response),
                }
            })?;

            let answer = match &question.format {
                QuestionFormat::Likert { scale } => {
                    if value.fract() != 0.0 {
                        return Err(IntakeViolation::FractionalRating {
                            id: question.id.0.clone(),
                            value,
                        });
                    }
                    let rating = value as i64;
                    if rating < i64::from(scale.min) || rating > i64::from(scale.max) {
                        return Err(IntakeViolation::RatingOutOfRange {
                            id: question.id.0.clone(),
                            rating,
                            min: scale.min,
                            max: scale.max,
                        });
                    }
                    AnswerValue::Rating(rating as u8)
                }
                QuestionFormat::Choice { options, .. } => {
                    if value.fract() != 0.0 || value < 0.0 {
                        return Err(IntakeViolation::InvalidChoiceIndex {
                            id: question.id.0.clone(),
                            value,
                        });
                    }
                    let index = value as i64;
                    if index as usize >= options.len() {
                        return Err(IntakeViolation::ChoiceOutOfBounds {
                            id: question.id.0.clone(),
                            index,
                            available: options.len(),
                        });
                    }
                    AnswerValue::Choice(index as usize)
                }
            };

            resolved.push(ScoredResponse {
                question_id: response.question_id.clone(),
                answer,
                time_spent_ms: response.time_spent_ms,
            });
        }

        Ok(resolved)
    }
}

fn raw_answer_text(response: &AssessmentResponse) -> String {
    match &response.answer {
        RawAnswer::Number(value) => value.to_string(),
        RawAnswer::Text(value) => value.clone(),
    }
}
