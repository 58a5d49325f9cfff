use serde::{Deserialize, Serialize};

use super::super::domain::WiscarDimension;
use super::super::scoring::Recommendation;
use super::careers::CareerPathView;

/// Six-factor readiness percentages, one per WISCAR dimension. Always carries
/// exactly the six keys regardless of which dimensions were answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl WiscarScores {
    pub fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world,
        }
    }

    pub(crate) fn set(&mut self, dimension: WiscarDimension, value: u8) {
        match dimension {
            WiscarDimension::Will => self.will = value,
            WiscarDimension::Interest => self.interest = value,
            WiscarDimension::Skill => self.skill = value,
            WiscarDimension::Cognitive => self.cognitive = value,
            WiscarDimension::Ability => self.ability = value,
            WiscarDimension::RealWorld => self.real_world = value,
        }
    }

    /// Mean of the six dimension percentages, feeding the confidence blend.
    pub fn average(&self) -> f32 {
        let total: u16 = WiscarDimension::ALL
            .iter()
            .map(|dimension| u16::from(self.get(*dimension)))
            .sum();
        f32::from(total) / WiscarDimension::ALL.len() as f32
    }

    pub fn entries(&self) -> [(WiscarDimension, u8); 6] {
        [
            (WiscarDimension::Will, self.will),
            (WiscarDimension::Interest, self.interest),
            (WiscarDimension::Skill, self.skill),
            (WiscarDimension::Cognitive, self.cognitive),
            (WiscarDimension::Ability, self.ability),
            (WiscarDimension::RealWorld, self.real_world),
        ]
    }
}

/// Final immutable outcome for one completed run, recomputed fresh from the
/// full response set and never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub psychometric_score: u8,
    pub technical_score: u8,
    pub wiscar_scores: WiscarScores,
    pub overall_confidence: u8,
    pub recommendation: Recommendation,
    pub insights: Vec<String>,
    pub next_steps: Vec<String>,
    pub career_paths: Vec<CareerPathView>,
}
