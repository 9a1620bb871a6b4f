use serde::Serialize;

use crate::types::profile::{Chronotype, ProductivityType};
use crate::types::scoring::CategoryScores;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compatibility {
    pub works_well_with: Vec<ProductivityType>,
    pub challenges_with: Vec<ProductivityType>,
}

/// Everything a front end needs to present a finished quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    #[serde(rename = "type")]
    pub kind: ProductivityType,
    pub chronotype: Chronotype,
    pub description: &'static str,
    pub time_blocking: Vec<&'static str>,
    pub tools: Vec<&'static str>,
    pub habits: Vec<&'static str>,
    pub strengths: Vec<&'static str>,
    pub challenges: Vec<&'static str>,
    pub compatibility: Compatibility,
    pub score: CategoryScores,
}

#[derive(Debug, Clone)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
    pub question: Option<String>,
}

impl Finding {
    pub fn new(
        id: &str,
        title: impl Into<String>,
        body: impl Into<String>,
        blocking: bool,
        question: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.into(),
            body: body.into(),
            blocking,
            question: question.map(str::to_string),
        }
    }
}
