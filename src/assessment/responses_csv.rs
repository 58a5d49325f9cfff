//! Ingestion of recorded response logs.
//!
//! The collaborator UI records one row per answered question. CSV logs carry
//! `question_id,answer,time_spent_ms` columns; JSON logs carry the
//! [`AssessmentResponse`] array directly.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{AssessmentResponse, QuestionId, RawAnswer};

/// Errors raised while importing a recorded response log.
#[derive(Debug, thiserror::Error)]
pub enum ResponseImportError {
    #[error("failed to read response log: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid response CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid response JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {row} is missing an answer for '{id}'")]
    MissingAnswer { row: usize, id: String },
}

pub struct ResponseLog;

impl ResponseLog {
    /// Load a response log, dispatching on the file extension: `.csv` parses
    /// columns, anything else is treated as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<AssessmentResponse>, ResponseImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;

        let is_csv = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            Self::from_csv_reader(file)
        } else {
            Self::from_json_reader(file)
        }
    }

    pub fn from_csv_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<AssessmentResponse>, ResponseImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut responses = Vec::new();

        for (index, record) in csv_reader.deserialize::<ResponseRow>().enumerate() {
            let row = record?;
            if row.answer.is_empty() {
                return Err(ResponseImportError::MissingAnswer {
                    // Header occupies the first line.
                    row: index + 2,
                    id: row.question_id,
                });
            }

            let answer = match row.answer.parse::<f64>() {
                Ok(value) => RawAnswer::Number(value),
                Err(_) => RawAnswer::Text(row.answer),
            };

            responses.push(AssessmentResponse {
                question_id: QuestionId(row.question_id),
                answer,
                time_spent_ms: row.time_spent_ms.unwrap_or(0),
            });
        }

        Ok(responses)
    }

    pub fn from_json_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<AssessmentResponse>, ResponseImportError> {
        let responses: Vec<AssessmentResponse> = serde_json::from_reader(reader)?;
        Ok(responses)
    }
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    question_id: String,
    answer: String,
    #[serde(default)]
    time_spent_ms: Option<u64>,
}
