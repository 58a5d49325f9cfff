use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub String);

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier wrapper for scored attempts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptId(pub String);

/// Top-level question groupings, each scored independently before being
/// blended into the overall result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Psychometric,
    Technical,
    Wiscar,
}

impl Section {
    pub const fn label(self) -> &'static str {
        match self {
            Section::Psychometric => "Psychological Fit",
            Section::Technical => "Technical Readiness",
            Section::Wiscar => "WISCAR Framework",
        }
    }
}

/// Presentation kind of a question. Scoring treats the three choice kinds
/// identically; the distinction only drives how the collaborator renders the
/// item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Likert,
    MultipleChoice,
    Technical,
    Scenario,
}

/// The six WISCAR readiness dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    pub const ALL: [WiscarDimension; 6] = [
        WiscarDimension::Will,
        WiscarDimension::Interest,
        WiscarDimension::Skill,
        WiscarDimension::Cognitive,
        WiscarDimension::Ability,
        WiscarDimension::RealWorld,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            WiscarDimension::Will => "Will",
            WiscarDimension::Interest => "Interest",
            WiscarDimension::Skill => "Skill",
            WiscarDimension::Cognitive => "Cognitive Readiness",
            WiscarDimension::Ability => "Ability to Learn",
            WiscarDimension::RealWorld => "Real-World Alignment",
        }
    }

    /// Stable short key matching the result mapping's field names.
    pub const fn key(self) -> &'static str {
        match self {
            WiscarDimension::Will => "will",
            WiscarDimension::Interest => "interest",
            WiscarDimension::Skill => "skill",
            WiscarDimension::Cognitive => "cognitive",
            WiscarDimension::Ability => "ability",
            WiscarDimension::RealWorld => "real_world",
        }
    }
}

/// Category tag within a section. WISCAR questions carry one of the six
/// dimensions; other sections use free labels for authoring clarity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionCategory {
    Dimension(WiscarDimension),
    Named(String),
}

impl From<WiscarDimension> for QuestionCategory {
    fn from(value: WiscarDimension) -> Self {
        Self::Dimension(value)
    }
}

impl From<&str> for QuestionCategory {
    fn from(value: &str) -> Self {
        Self::Named(value.to_string())
    }
}

/// Ordinal agreement scale for likert items. The battery always uses 1..5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikertScale {
    pub min: u8,
    pub max: u8,
    pub labels: Vec<String>,
}

impl LikertScale {
    pub fn one_to_five(labels: [&str; 5]) -> Self {
        Self {
            min: 1,
            max: 5,
            labels: labels.iter().map(|label| label.to_string()).collect(),
        }
    }
}

/// Response format. Exactly one shape is representable per question, so a
/// likert item can never carry options and a choice item can never carry a
/// scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionFormat {
    Likert {
        scale: LikertScale,
    },
    Choice {
        options: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        correct: Option<usize>,
    },
}

/// One catalog entry. Immutable once the catalog is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub kind: QuestionKind,
    pub section: Section,
    pub category: QuestionCategory,
    pub prompt: String,
    pub format: QuestionFormat,
    pub weight: f32,
}

impl Question {
    /// The WISCAR dimension this question aggregates into, if any.
    pub fn dimension(&self) -> Option<WiscarDimension> {
        match self.category {
            QuestionCategory::Dimension(dimension) => Some(dimension),
            QuestionCategory::Named(_) => None,
        }
    }
}

/// Answer exactly as the collaborator submitted it: a number, or a string
/// that may hold one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Number(f64),
    Text(String),
}

impl RawAnswer {
    pub(crate) fn as_number(&self) -> Option<f64> {
        match self {
            RawAnswer::Number(value) => Some(*value),
            RawAnswer::Text(value) => value.trim().parse::<f64>().ok(),
        }
    }
}

impl From<f64> for RawAnswer {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for RawAnswer {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for RawAnswer {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Wire record produced by the response collector, one per answered question.
/// `time_spent_ms` is recorded and surfaced but never consumed by scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub question_id: QuestionId,
    pub answer: RawAnswer,
    #[serde(default)]
    pub time_spent_ms: u64,
}

/// Answer resolved against its question definition at intake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerValue {
    /// Likert rating within the question's scale.
    Rating(u8),
    /// Zero-based index into the question's option list.
    Choice(usize),
}

/// Response carrying a validated, type-resolved answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResponse {
    pub question_id: QuestionId,
    pub answer: AnswerValue,
    pub time_spent_ms: u64,
}

/// A completed run submitted for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub responses: Vec<AssessmentResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<NaiveDateTime>,
}

impl AssessmentSubmission {
    pub fn new(responses: Vec<AssessmentResponse>) -> Self {
        Self {
            responses,
            submitted_at: None,
        }
    }
}
