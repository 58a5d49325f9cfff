use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::catalog::QuestionCatalog;
use super::domain::{AssessmentSubmission, AttemptId};
use super::intake::{IntakeViolation, ResponseIntake};
use super::report::AssessmentResult;
use super::scoring::ScoringEngine;

static ATTEMPT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_attempt_id() -> AttemptId {
    let id = ATTEMPT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AttemptId(format!("attempt-{id:06}"))
}

/// One scored submission. `skipped` counts responses that named a question id
/// absent from the catalog and were ignored under the permissive intake
/// contract.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredAttempt {
    pub attempt_id: AttemptId,
    pub answered: usize,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<NaiveDateTime>,
    pub result: AssessmentResult,
}

/// Stateless facade composing intake validation and the scoring engine.
/// Nothing is retained between calls; each submission is validated, scored,
/// and returned in one pass.
pub struct AssessmentService {
    catalog: Arc<QuestionCatalog>,
    intake: ResponseIntake,
    engine: ScoringEngine,
}

impl AssessmentService {
    pub fn new(catalog: Arc<QuestionCatalog>, engine: ScoringEngine) -> Self {
        Self {
            catalog,
            intake: ResponseIntake,
            engine,
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Validate and score a completed run.
    pub fn score(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<ScoredAttempt, IntakeViolation> {
        let resolved = self.intake.resolve(&self.catalog, &submission.responses)?;
        let skipped = submission.responses.len() - resolved.len();
        let result = self.engine.evaluate(&resolved, &self.catalog);

        Ok(ScoredAttempt {
            attempt_id: next_attempt_id(),
            answered: resolved.len(),
            skipped,
            submitted_at: submission.submitted_at,
            result,
        })
    }
}
