use serde::Serialize;

use super::catalog::QuestionCatalog;
use super::domain::{AssessmentResponse, Question, RawAnswer, ScoredResponse, Section};
use super::intake::{IntakeViolation, ResponseIntake};
use super::report::AssessmentResult;
use super::scoring::ScoringEngine;

/// Pages of one run. Transitions are linear and forward-only, driven by
/// exhausting the catalog; `Results` is terminal until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStep {
    Intro,
    Psychometric,
    Technical,
    Wiscar,
    Results,
}

impl AssessmentStep {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentStep::Intro => "intro",
            AssessmentStep::Psychometric => "psychometric",
            AssessmentStep::Technical => "technical",
            AssessmentStep::Wiscar => "wiscar",
            AssessmentStep::Results => "results",
        }
    }
}

impl From<Section> for AssessmentStep {
    fn from(value: Section) -> Self {
        match value {
            Section::Psychometric => AssessmentStep::Psychometric,
            Section::Technical => AssessmentStep::Technical,
            Section::Wiscar => AssessmentStep::Wiscar,
        }
    }
}

/// Errors raised by out-of-order session calls.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("the run has not started; call begin first")]
    NotStarted,
    #[error("the run is complete; restart before answering again")]
    AlreadyComplete,
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
}

/// One interactive run of the battery: collects answers in catalog order,
/// advances the step at section boundaries, and scores exactly once when the
/// catalog is exhausted. Restarting discards all accumulated responses and
/// the result.
#[derive(Debug)]
pub struct AssessmentSession {
    catalog: QuestionCatalog,
    engine: ScoringEngine,
    intake: ResponseIntake,
    step: AssessmentStep,
    cursor: usize,
    responses: Vec<AssessmentResponse>,
    resolved: Vec<ScoredResponse>,
    result: Option<AssessmentResult>,
}

impl AssessmentSession {
    pub fn new(catalog: QuestionCatalog, engine: ScoringEngine) -> Self {
        Self {
            catalog,
            engine,
            intake: ResponseIntake,
            step: AssessmentStep::Intro,
            cursor: 0,
            responses: Vec::new(),
            resolved: Vec::new(),
            result: None,
        }
    }

    pub fn step(&self) -> AssessmentStep {
        self.step
    }

    pub fn responses(&self) -> &[AssessmentResponse] {
        &self.responses
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.step == AssessmentStep::Results
    }

    /// The question awaiting an answer, if the run is mid-battery.
    pub fn current_question(&self) -> Option<&Question> {
        match self.step {
            AssessmentStep::Intro | AssessmentStep::Results => None,
            _ => self.catalog.questions().get(self.cursor),
        }
    }

    /// Leave the intro page. An empty catalog completes immediately with an
    /// all-zero result.
    pub fn begin(&mut self) {
        if self.step != AssessmentStep::Intro {
            return;
        }

        match self.catalog.questions().first() {
            Some(question) => self.step = AssessmentStep::from(question.section),
            None => self.finish(),
        }
    }

    /// Record an answer for the current question and advance. The elapsed
    /// milliseconds are supplied by the caller and recorded verbatim; scoring
    /// never consumes them.
    pub fn answer(
        &mut self,
        answer: RawAnswer,
        time_spent_ms: u64,
    ) -> Result<AssessmentStep, SessionError> {
        let question = match self.step {
            AssessmentStep::Intro => return Err(SessionError::NotStarted),
            AssessmentStep::Results => return Err(SessionError::AlreadyComplete),
            _ => self
                .catalog
                .questions()
                .get(self.cursor)
                .ok_or(SessionError::AlreadyComplete)?,
        };

        let response = AssessmentResponse {
            question_id: question.id.clone(),
            answer,
            time_spent_ms,
        };

        // Validate eagerly so a bad answer surfaces on the page it was given.
        let resolved = self.intake.resolve(&self.catalog, &[response.clone()])?;
        self.resolved.extend(resolved);
        self.responses.push(response);
        self.cursor += 1;

        match self.catalog.questions().get(self.cursor) {
            Some(next) => self.step = AssessmentStep::from(next.section),
            None => self.finish(),
        }

        Ok(self.step)
    }

    /// Return to the intro page, clearing all accumulated state.
    pub fn restart(&mut self) {
        self.step = AssessmentStep::Intro;
        self.cursor = 0;
        self.responses.clear();
        self.resolved.clear();
        self.result = None;
    }

    fn finish(&mut self) {
        self.result = Some(self.engine.evaluate(&self.resolved, &self.catalog));
        self.step = AssessmentStep::Results;
    }
}
