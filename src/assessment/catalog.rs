use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use super::domain::{
    LikertScale, Question, QuestionCategory, QuestionFormat, QuestionId, QuestionKind, Section,
    WiscarDimension,
};

/// Errors raised while constructing or loading a question catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate question id '{0}'")]
    DuplicateId(String),
    #[error("question '{id}' declares an empty option list")]
    EmptyOptions { id: String },
    #[error("question '{id}' marks option {correct} correct but only {available} options exist")]
    CorrectOutOfBounds {
        id: String,
        correct: usize,
        available: usize,
    },
    #[error("question '{id}' uses an unsupported scale {min}..{max} (the battery scores 1..5)")]
    UnsupportedScale { id: String, min: u8, max: u8 },
    #[error("wiscar question '{id}' carries free-form category '{category}' instead of a dimension")]
    UnknownDimension { id: String, category: String },
    #[error("question '{id}' declares non-positive weight {weight}")]
    InvalidWeight { id: String, weight: f32 },
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable, validated question battery. Injected wherever scoring happens
/// so tests and deployments can substitute smaller catalogs.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Validate and freeze an authored question list.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&QuestionId> = HashSet::new();
        for question in &questions {
            if !seen.insert(&question.id) {
                return Err(CatalogError::DuplicateId(question.id.0.clone()));
            }

            if !(question.weight.is_finite() && question.weight > 0.0) {
                return Err(CatalogError::InvalidWeight {
                    id: question.id.0.clone(),
                    weight: question.weight,
                });
            }

            match &question.format {
                QuestionFormat::Likert { scale } => {
                    if scale.min != 1 || scale.max != 5 {
                        return Err(CatalogError::UnsupportedScale {
                            id: question.id.0.clone(),
                            min: scale.min,
                            max: scale.max,
                        });
                    }
                }
                QuestionFormat::Choice { options, correct } => {
                    if options.is_empty() {
                        return Err(CatalogError::EmptyOptions {
                            id: question.id.0.clone(),
                        });
                    }
                    if let Some(correct) = correct {
                        if *correct >= options.len() {
                            return Err(CatalogError::CorrectOutOfBounds {
                                id: question.id.0.clone(),
                                correct: *correct,
                                available: options.len(),
                            });
                        }
                    }
                }
            }

            if question.section == Section::Wiscar {
                if let QuestionCategory::Named(category) = &question.category {
                    return Err(CatalogError::UnknownDimension {
                        id: question.id.0.clone(),
                        category: category.clone(),
                    });
                }
            }
        }

        Ok(Self { questions })
    }

    /// The built-in Edge AI readiness battery.
    pub fn standard() -> Self {
        // Authored below and asserted valid by tests, so no validation pass.
        Self {
            questions: standard_questions(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_json::from_reader(reader)?;
        Self::new(questions)
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| &question.id == id)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn section_questions(&self, section: Section) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.section == section)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn likert(
    id: &str,
    section: Section,
    category: QuestionCategory,
    prompt: &str,
    labels: [&str; 5],
    weight: f32,
) -> Question {
    Question {
        id: QuestionId::from(id),
        kind: QuestionKind::Likert,
        section,
        category,
        prompt: prompt.to_string(),
        format: QuestionFormat::Likert {
            scale: LikertScale::one_to_five(labels),
        },
        weight,
    }
}

fn choice(
    id: &str,
    kind: QuestionKind,
    section: Section,
    category: QuestionCategory,
    prompt: &str,
    options: &[&str],
    correct: Option<usize>,
    weight: f32,
) -> Question {
    Question {
        id: QuestionId::from(id),
        kind,
        section,
        category,
        prompt: prompt.to_string(),
        format: QuestionFormat::Choice {
            options: options.iter().map(|option| option.to_string()).collect(),
            correct,
        },
        weight,
    }
}

const AGREEMENT: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

const FREQUENCY: [&str; 5] = ["Not at all", "Rarely", "Sometimes", "Often", "Always"];

const CADENCE: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Always"];

fn standard_questions() -> Vec<Question> {
    vec![
        // Psychometric battery
        likert(
            "psych_1",
            Section::Psychometric,
            QuestionCategory::from("interest"),
            "I enjoy learning about new AI technologies and their practical applications.",
            AGREEMENT,
            1.2,
        ),
        likert(
            "psych_2",
            Section::Psychometric,
            QuestionCategory::from("persistence"),
            "I persist through complex technical problems even when facing repeated failures.",
            AGREEMENT,
            1.5,
        ),
        likert(
            "psych_3",
            Section::Psychometric,
            QuestionCategory::from("systems_thinking"),
            "I think systematically about how different components interact in complex systems.",
            AGREEMENT,
            1.3,
        ),
        likert(
            "psych_4",
            Section::Psychometric,
            QuestionCategory::from("collaboration"),
            "I enjoy collaborating with multidisciplinary teams on technical projects.",
            AGREEMENT,
            1.0,
        ),
        choice(
            "psych_5",
            QuestionKind::MultipleChoice,
            Section::Psychometric,
            QuestionCategory::from("problem_solving"),
            "When faced with a complex technical problem, you prefer to:",
            &[
                "Break it down into smaller, manageable components",
                "Research similar problems and their solutions",
                "Experiment with different approaches quickly",
                "Discuss with colleagues and brainstorm solutions",
            ],
            None,
            1.1,
        ),
        // Technical battery
        choice(
            "tech_1",
            QuestionKind::MultipleChoice,
            Section::Technical,
            QuestionCategory::from("ai_fundamentals"),
            "Which technique is most important for deploying AI models on resource-constrained edge devices?",
            &[
                "Model quantization and pruning",
                "Increasing model complexity",
                "Using larger datasets",
                "Adding more layers",
            ],
            Some(0),
            2.0,
        ),
        choice(
            "tech_2",
            QuestionKind::MultipleChoice,
            Section::Technical,
            QuestionCategory::from("edge_computing"),
            "What is the primary advantage of edge computing over cloud computing for AI applications?",
            &[
                "Higher computational power",
                "Reduced latency and improved privacy",
                "Lower development costs",
                "Simpler deployment process",
            ],
            Some(1),
            1.8,
        ),
        choice(
            "tech_3",
            QuestionKind::MultipleChoice,
            Section::Technical,
            QuestionCategory::from("programming"),
            "Which programming languages are most commonly used for edge AI development?",
            &[
                "Python and JavaScript",
                "C++ and Python",
                "Java and Ruby",
                "Swift and Kotlin",
            ],
            Some(1),
            1.5,
        ),
        choice(
            "tech_4",
            QuestionKind::Technical,
            Section::Technical,
            QuestionCategory::from("optimization"),
            "A neural network model requires 2GB of memory but your edge device only has 512MB available. What would be your first optimization approach?",
            &[
                "Use model quantization to reduce precision",
                "Remove all convolutional layers",
                "Increase the batch size",
                "Add more training data",
            ],
            Some(0),
            2.2,
        ),
        // WISCAR battery
        likert(
            "wiscar_will_1",
            Section::Wiscar,
            QuestionCategory::from(WiscarDimension::Will),
            "I am willing to spend 10+ hours per week learning edge AI concepts and technologies.",
            FREQUENCY,
            1.5,
        ),
        likert(
            "wiscar_interest_1",
            Section::Wiscar,
            QuestionCategory::from(WiscarDimension::Interest),
            "I find the intersection of AI and hardware fascinating and want to explore it deeply.",
            FREQUENCY,
            1.4,
        ),
        choice(
            "wiscar_skill_1",
            QuestionKind::MultipleChoice,
            Section::Wiscar,
            QuestionCategory::from(WiscarDimension::Skill),
            "How would you rate your current programming experience?",
            &[
                "Beginner (0-1 years)",
                "Intermediate (2-3 years)",
                "Advanced (4-6 years)",
                "Expert (7+ years)",
            ],
            None,
            1.8,
        ),
        choice(
            "wiscar_cognitive_1",
            QuestionKind::Scenario,
            Section::Wiscar,
            QuestionCategory::from(WiscarDimension::Cognitive),
            "You're tasked with optimizing an AI model that's running slowly on an IoT device. The model accuracy is good but inference time is too slow. How do you approach this?",
            &[
                "Analyze computational bottlenecks and apply targeted optimizations",
                "Reduce model accuracy to improve speed",
                "Upgrade the hardware immediately",
                "Redesign the entire system architecture",
            ],
            Some(0),
            2.0,
        ),
        likert(
            "wiscar_ability_1",
            Section::Wiscar,
            QuestionCategory::from(WiscarDimension::Ability),
            "I actively seek feedback and use it to improve my technical skills.",
            CADENCE,
            1.3,
        ),
        choice(
            "wiscar_real_world_1",
            QuestionKind::MultipleChoice,
            Section::Wiscar,
            QuestionCategory::from(WiscarDimension::RealWorld),
            "Which aspect of edge AI work appeals to you most?",
            &[
                "Solving real-world problems with immediate impact",
                "Working with cutting-edge technology",
                "The technical challenges and problem-solving",
                "Building products that users interact with daily",
            ],
            None,
            1.2,
        ),
    ]
}
