pub mod json;
pub mod md;

use crate::error::WorkstyleError;
use crate::questions::Question;
use crate::types::profile::ProductivityType;
use crate::types::report::QuizResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    /// Parses the config spelling (`md`, `json`).
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "json" => Some(OutputFormat::Json),
            "md" => Some(OutputFormat::Md),
            _ => None,
        }
    }
}

pub fn render(result: &QuizResult, format: OutputFormat) -> Result<String, WorkstyleError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(WorkstyleError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}

pub fn render_questions(
    questions: &[Question],
    format: OutputFormat,
) -> Result<String, WorkstyleError> {
    match format {
        OutputFormat::Json => json::questions_to_json(questions).map_err(WorkstyleError::Json),
        OutputFormat::Md => Ok(md::questions_to_markdown(questions)),
    }
}

pub fn render_profile(
    kind: ProductivityType,
    format: OutputFormat,
) -> Result<String, WorkstyleError> {
    match format {
        OutputFormat::Json => json::profile_to_json(kind).map_err(WorkstyleError::Json),
        OutputFormat::Md => Ok(md::profile_to_markdown(kind)),
    }
}
