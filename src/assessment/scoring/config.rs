use serde::{Deserialize, Serialize};

/// Blend weights and decision gates for composing the overall result.
///
/// The defaults are the authored instrument constants; they are carried as an
/// injected value rather than module-level statics so alternative rubrics can
/// be exercised in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Psychometric share of the overall confidence blend.
    pub psychometric_blend: f32,
    /// Technical share of the overall confidence blend, weighted highest.
    pub technical_blend: f32,
    /// WISCAR-average share of the overall confidence blend.
    pub wiscar_blend: f32,
    /// Minimum overall confidence for a `yes` recommendation.
    pub yes_confidence_floor: u8,
    /// Minimum technical percentage for a `yes` recommendation.
    pub yes_technical_floor: u8,
    /// Minimum overall confidence for a `maybe` recommendation.
    pub maybe_confidence_floor: u8,
    /// Section percentage below which the `maybe` next steps include a
    /// remediation pair for that section.
    pub remediation_floor: u8,
    /// When set, career fit scores are clamped into 0..100. Off by default:
    /// the authored deployment-specialist formula is allowed to exceed 100.
    pub clamp_fit_scores: bool,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            psychometric_blend: 0.3,
            technical_blend: 0.4,
            wiscar_blend: 0.3,
            yes_confidence_floor: 75,
            yes_technical_floor: 70,
            maybe_confidence_floor: 55,
            remediation_floor: 60,
            clamp_fit_scores: false,
        }
    }
}
