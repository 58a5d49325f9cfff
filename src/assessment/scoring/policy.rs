use serde::{Deserialize, Serialize};

use super::config::ScoringWeights;

/// Reading of a section percentage against the fixed fit thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitInterpretation {
    ExcellentFit,
    GoodFit,
    ModerateFit,
    SomePotential,
    NeedsDevelopment,
}

impl FitInterpretation {
    pub const fn label(self) -> &'static str {
        match self {
            FitInterpretation::ExcellentFit => "Excellent fit",
            FitInterpretation::GoodFit => "Good fit",
            FitInterpretation::ModerateFit => "Moderate fit",
            FitInterpretation::SomePotential => "Some potential",
            FitInterpretation::NeedsDevelopment => "Needs development",
        }
    }
}

/// Thresholds are inclusive on the lower bound, checked in descending order.
pub(crate) fn interpret(percentage: f32) -> FitInterpretation {
    if percentage >= 80.0 {
        FitInterpretation::ExcellentFit
    } else if percentage >= 65.0 {
        FitInterpretation::GoodFit
    } else if percentage >= 50.0 {
        FitInterpretation::ModerateFit
    } else if percentage >= 35.0 {
        FitInterpretation::SomePotential
    } else {
        FitInterpretation::NeedsDevelopment
    }
}

/// Categorical pursue / prepare-first / reconsider guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Yes => "yes",
            Recommendation::Maybe => "maybe",
            Recommendation::No => "no",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Recommendation::Yes => "Excellent Fit!",
            Recommendation::Maybe => "Promising Potential",
            Recommendation::No => "Consider Alternatives",
        }
    }

    pub const fn subtitle(self) -> &'static str {
        match self {
            Recommendation::Yes => "You show strong potential for Edge AI integration",
            Recommendation::Maybe => "With focused preparation, you could succeed",
            Recommendation::No => "Other tech paths might be a better fit",
        }
    }
}

/// Overall confidence is the fixed convex blend of the three groupings,
/// rounded to an integer percentage.
pub(crate) fn overall_confidence(
    psychometric_pct: f32,
    technical_pct: f32,
    wiscar_average: f32,
    weights: &ScoringWeights,
) -> u8 {
    let blended = psychometric_pct * weights.psychometric_blend
        + technical_pct * weights.technical_blend
        + wiscar_average * weights.wiscar_blend;
    blended.round() as u8
}

/// Both gates are required for `yes`: high confidence with a weak technical
/// score degrades to `maybe` at best.
pub(crate) fn decide_recommendation(
    overall_confidence: u8,
    technical_pct: f32,
    weights: &ScoringWeights,
) -> Recommendation {
    if overall_confidence >= weights.yes_confidence_floor
        && technical_pct >= f32::from(weights.yes_technical_floor)
    {
        Recommendation::Yes
    } else if overall_confidence >= weights.maybe_confidence_floor {
        Recommendation::Maybe
    } else {
        Recommendation::No
    }
}
