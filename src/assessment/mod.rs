//! Edge AI readiness battery: catalog, intake validation, scoring, and
//! report composition.
//!
//! The scoring engine is a pure, single-pass aggregation: the collaborator
//! gathers a full response set, the engine folds it into per-section
//! percentages, a blended confidence score, a categorical recommendation,
//! and derived text. Everything stateful (the session walk, the HTTP facade)
//! sits around that core without feeding anything back into it.

pub mod catalog;
pub mod domain;
pub(crate) mod intake;
pub(crate) mod report;
pub mod responses_csv;
pub mod router;
pub mod service;
pub mod session;

pub(crate) mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, QuestionCatalog};
pub use domain::{
    AnswerValue, AssessmentResponse, AssessmentSubmission, AttemptId, LikertScale, Question,
    QuestionCategory, QuestionFormat, QuestionId, QuestionKind, RawAnswer, ScoredResponse,
    Section, WiscarDimension,
};
pub use intake::{IntakeViolation, ResponseIntake};
pub use report::{AssessmentResult, CareerPathView, CareerRole, WiscarScores};
pub use responses_csv::{ResponseImportError, ResponseLog};
pub use router::assessment_router;
pub use scoring::{FitInterpretation, Recommendation, ScoringEngine, ScoringWeights, SectionScore};
pub use service::{AssessmentService, ScoredAttempt};
pub use session::{AssessmentSession, AssessmentStep, SessionError};
