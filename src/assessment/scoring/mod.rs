mod config;
pub(crate) mod policy;
pub(crate) mod rules;

pub use config::ScoringWeights;
pub use policy::{FitInterpretation, Recommendation};
pub use rules::SectionScore;

use super::catalog::QuestionCatalog;
use super::domain::{ScoredResponse, Section};
use super::report::{careers, insights, AssessmentResult};

/// Stateless engine folding a completed response set into the overall
/// result. Every invocation takes the full response set and catalog and
/// returns a fresh, immutable result.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Weighted tally for a single section, exposed for per-section views.
    pub fn section_score(
        &self,
        responses: &[ScoredResponse],
        catalog: &QuestionCatalog,
        section: Section,
    ) -> SectionScore {
        rules::score_section(responses, catalog, section)
    }

    /// The six WISCAR dimension percentages, rounded independently.
    pub fn wiscar_scores(
        &self,
        responses: &[ScoredResponse],
        catalog: &QuestionCatalog,
    ) -> super::report::WiscarScores {
        rules::wiscar_scores(responses, catalog)
    }

    /// Compose the overall result: section percentages, confidence blend,
    /// recommendation, derived text, and ranked career paths.
    pub fn evaluate(
        &self,
        responses: &[ScoredResponse],
        catalog: &QuestionCatalog,
    ) -> AssessmentResult {
        let psychometric = rules::score_section(responses, catalog, Section::Psychometric);
        let technical = rules::score_section(responses, catalog, Section::Technical);
        let wiscar = rules::wiscar_scores(responses, catalog);

        let overall_confidence = policy::overall_confidence(
            psychometric.percentage,
            technical.percentage,
            wiscar.average(),
            &self.weights,
        );
        let recommendation =
            policy::decide_recommendation(overall_confidence, technical.percentage, &self.weights);

        let insights = insights::generate_insights(&psychometric, &technical, &wiscar);
        let next_steps = insights::next_steps(
            recommendation,
            technical.percentage,
            psychometric.percentage,
            &self.weights,
        );
        let career_paths =
            careers::rank_career_paths(overall_confidence, technical.percentage, &self.weights);

        AssessmentResult {
            psychometric_score: psychometric.percentage.round() as u8,
            technical_score: technical.percentage.round() as u8,
            wiscar_scores: wiscar,
            overall_confidence,
            recommendation,
            insights,
            next_steps,
            career_paths,
        }
    }
}
