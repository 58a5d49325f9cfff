use super::super::scoring::{Recommendation, ScoringWeights, SectionScore};
use super::views::WiscarScores;

/// Build the insight list by independent threshold checks. Exactly one
/// psychometric and one technical message always fire; the motivation and
/// analytical messages are additive, so 2 to 4 strings come back in check
/// order.
pub(crate) fn generate_insights(
    psychometric: &SectionScore,
    technical: &SectionScore,
    wiscar: &WiscarScores,
) -> Vec<String> {
    let mut insights = Vec::new();

    if psychometric.percentage >= 75.0 {
        insights.push(
            "You show strong psychological alignment with Edge AI work, including curiosity and persistence."
                .to_string(),
        );
    } else if psychometric.percentage >= 50.0 {
        insights.push(
            "You have moderate psychological fit. Building confidence through structured learning would help."
                .to_string(),
        );
    } else {
        insights.push(
            "Consider exploring foundational AI concepts to build interest and confidence."
                .to_string(),
        );
    }

    if technical.percentage >= 70.0 {
        insights.push("Your technical foundation is solid for Edge AI development.".to_string());
    } else if technical.percentage >= 50.0 {
        insights.push(
            "You have basic technical understanding but need focused skill development."
                .to_string(),
        );
    } else {
        insights.push(
            "Significant technical preparation needed. Start with programming and AI fundamentals."
                .to_string(),
        );
    }

    if wiscar.will >= 70 && wiscar.interest >= 70 {
        insights.push(
            "Your motivation and interest levels are excellent - key predictors of success."
                .to_string(),
        );
    }

    if wiscar.cognitive >= 75 {
        insights.push(
            "You demonstrate strong analytical thinking suitable for complex Edge AI challenges."
                .to_string(),
        );
    }

    insights
}

/// Action items keyed to the recommendation. The `maybe` branch includes a
/// remediation pair per weak section and always ends with the reassess step.
pub(crate) fn next_steps(
    recommendation: Recommendation,
    technical_pct: f32,
    psychometric_pct: f32,
    weights: &ScoringWeights,
) -> Vec<String> {
    let mut steps = Vec::new();

    match recommendation {
        Recommendation::Yes => {
            steps.push("Start with TinyML specialization or Edge AI certification".to_string());
            steps.push(
                "Build a portfolio project deploying a model on Raspberry Pi or Arduino"
                    .to_string(),
            );
            steps.push("Join Edge AI communities and attend relevant meetups".to_string());
            steps.push("Apply for Edge AI Engineer or Embedded AI Developer roles".to_string());
        }
        Recommendation::Maybe => {
            let remediation_floor = f32::from(weights.remediation_floor);
            if technical_pct < remediation_floor {
                steps.push(
                    "Complete foundational courses in Python programming and machine learning"
                        .to_string(),
                );
                steps.push(
                    "Practice with TensorFlow Lite and model optimization techniques".to_string(),
                );
            }
            if psychometric_pct < remediation_floor {
                steps.push(
                    "Explore Edge AI through online courses and tutorials to build interest"
                        .to_string(),
                );
                steps.push(
                    "Connect with professionals in the field through LinkedIn and forums"
                        .to_string(),
                );
            }
            steps.push("Reassess readiness after 3-6 months of focused learning".to_string());
        }
        Recommendation::No => {
            steps.push(
                "Consider related fields: Data Science, Cloud AI Engineering, or Software Development"
                    .to_string(),
            );
            steps.push("Build stronger programming fundamentals before specializing".to_string());
            steps.push(
                "Explore AI through online courses to understand if interest develops".to_string(),
            );
        }
    }

    steps
}
