use std::cmp::Ordering;

use serde::Serialize;

use super::super::scoring::ScoringWeights;

/// Career roles suggested alongside the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerRole {
    EdgeAiEngineer,
    EmbeddedAiDeveloper,
    IotSolutionsArchitect,
    AiDeploymentSpecialist,
}

/// Career suggestion annotated with its computed fit score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerPathView {
    pub role: CareerRole,
    pub title: &'static str,
    pub description: &'static str,
    pub fit_score: f32,
    pub required_skills: &'static [&'static str],
    pub salary_range: &'static str,
}

struct CareerProfile {
    role: CareerRole,
    title: &'static str,
    description: &'static str,
    required_skills: &'static [&'static str],
    salary_range: &'static str,
}

const CAREER_PROFILES: [CareerProfile; 4] = [
    CareerProfile {
        role: CareerRole::EdgeAiEngineer,
        title: "Edge AI Engineer",
        description: "Deploy and optimize AI models on edge devices and IoT systems",
        required_skills: &[
            "Python/C++",
            "TensorFlow Lite",
            "Model Optimization",
            "Embedded Systems",
        ],
        salary_range: "$95,000 - $140,000",
    },
    CareerProfile {
        role: CareerRole::EmbeddedAiDeveloper,
        title: "Embedded AI Developer",
        description: "Integrate AI algorithms with hardware components and microcontrollers",
        required_skills: &[
            "C/C++",
            "Embedded Programming",
            "Neural Networks",
            "Hardware Interfacing",
        ],
        salary_range: "$85,000 - $125,000",
    },
    CareerProfile {
        role: CareerRole::IotSolutionsArchitect,
        title: "IoT Solutions Architect",
        description: "Design AI-driven edge IoT solutions for enterprise clients",
        required_skills: &[
            "System Architecture",
            "IoT Protocols",
            "AI/ML",
            "Cloud Integration",
        ],
        salary_range: "$110,000 - $160,000",
    },
    CareerProfile {
        role: CareerRole::AiDeploymentSpecialist,
        title: "AI Deployment Specialist",
        description: "Manage AI model deployment pipelines and device management at scale",
        required_skills: &[
            "MLOps",
            "DevOps",
            "Model Deployment",
            "Monitoring Systems",
        ],
        salary_range: "$90,000 - $130,000",
    },
];

/// Each role keys its own formula; there is no shared fit function. The
/// deployment-specialist formula can exceed 100 by construction and is only
/// bounded when the clamp toggle is set.
pub(crate) fn fit_score(role: CareerRole, overall_confidence: f32, technical_pct: f32) -> f32 {
    match role {
        CareerRole::EdgeAiEngineer => (overall_confidence - 5.0).max(0.0),
        CareerRole::EmbeddedAiDeveloper => {
            (technical_pct * 0.7 + overall_confidence * 0.3).max(0.0)
        }
        CareerRole::IotSolutionsArchitect => (overall_confidence - 10.0).max(0.0),
        CareerRole::AiDeploymentSpecialist => (overall_confidence * 0.8 + 10.0).max(0.0),
    }
}

/// Annotate the four fixed career records and sort them non-increasing by
/// fit score. The sort is stable, so ties keep declaration order.
pub(crate) fn rank_career_paths(
    overall_confidence: u8,
    technical_pct: f32,
    weights: &ScoringWeights,
) -> Vec<CareerPathView> {
    let confidence = f32::from(overall_confidence);

    let mut paths: Vec<CareerPathView> = CAREER_PROFILES
        .iter()
        .map(|profile| {
            let mut fit = fit_score(profile.role, confidence, technical_pct);
            if weights.clamp_fit_scores {
                fit = fit.clamp(0.0, 100.0);
            }
            CareerPathView {
                role: profile.role,
                title: profile.title,
                description: profile.description,
                fit_score: fit,
                required_skills: profile.required_skills,
                salary_range: profile.salary_range,
            }
        })
        .collect();

    paths.sort_by(|a, b| {
        b.fit_score
            .partial_cmp(&a.fit_score)
            .unwrap_or(Ordering::Equal)
    });
    paths
}
