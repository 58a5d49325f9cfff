use serde::Serialize;

use super::super::catalog::QuestionCatalog;
use super::super::domain::{AnswerValue, Question, QuestionFormat, ScoredResponse, Section};
use super::super::report::WiscarScores;
use super::policy::{self, FitInterpretation};

/// The battery's likert ceiling. Scales are validated to 1..5 at catalog
/// construction, so the max contribution per likert item is fixed.
const LIKERT_CEILING: f32 = 5.0;

/// Weighted tally for one section of the battery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionScore {
    pub section: Section,
    pub score: f32,
    pub max_score: f32,
    pub percentage: f32,
    pub interpretation: FitInterpretation,
}

#[derive(Debug, Default)]
struct Tally {
    score: f32,
    max: f32,
}

impl Tally {
    fn apply(&mut self, question: &Question, answer: AnswerValue) {
        match (&question.format, answer) {
            (QuestionFormat::Likert { .. }, AnswerValue::Rating(rating)) => {
                self.score += f32::from(rating) * question.weight;
                self.max += LIKERT_CEILING * question.weight;
            }
            (
                QuestionFormat::Choice {
                    correct: Some(correct),
                    ..
                },
                AnswerValue::Choice(index),
            ) => {
                if index == *correct {
                    self.score += question.weight;
                }
                self.max += question.weight;
            }
            (QuestionFormat::Choice { correct: None, .. }, AnswerValue::Choice(index)) => {
                // Self-rating items: the 0-based index is normalized into the
                // 0.25..1.0 range before weighting, keeping subjective items
                // comparable with objectively scored ones.
                self.score += ((index as f32 + 1.0) / 4.0) * question.weight;
                self.max += question.weight;
            }
            // Kind mismatches cannot survive intake.
            _ => {}
        }
    }

    fn percentage(&self) -> f32 {
        if self.max > 0.0 {
            self.score / self.max * 100.0
        } else {
            0.0
        }
    }
}

/// Fold every matched response for `section` into a weighted percentage.
/// Responses with no matching question contribute nothing; a section with no
/// matched questions scores 0, not an error.
pub(crate) fn score_section(
    responses: &[ScoredResponse],
    catalog: &QuestionCatalog,
    section: Section,
) -> SectionScore {
    let mut tally = Tally::default();

    for response in responses {
        let Some(question) = catalog.question(&response.question_id) else {
            continue;
        };
        if question.section != section {
            continue;
        }
        tally.apply(question, response.answer);
    }

    let percentage = tally.percentage();
    SectionScore {
        section,
        score: tally.score,
        max_score: tally.max,
        percentage,
        interpretation: policy::interpret(percentage),
    }
}

/// Apply the section accumulation rule per WISCAR dimension, rounding each
/// percentage independently. Dimensions with no matching questions yield 0.
pub(crate) fn wiscar_scores(
    responses: &[ScoredResponse],
    catalog: &QuestionCatalog,
) -> WiscarScores {
    let mut scores = WiscarScores::default();

    for dimension in super::super::domain::WiscarDimension::ALL {
        let mut tally = Tally::default();

        for response in responses {
            let Some(question) = catalog.question(&response.question_id) else {
                continue;
            };
            if question.section != Section::Wiscar || question.dimension() != Some(dimension) {
                continue;
            }
            tally.apply(question, response.answer);
        }

        scores.set(dimension, tally.percentage().round() as u8);
    }

    scores
}
