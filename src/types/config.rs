use crate::error::WorkstyleError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkstyleConfig {
    pub answers: Option<AnswersConfig>,
    pub report: Option<ReportConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswersConfig {
    #[serde(default = "default_policy")]
    pub policy: String,
    #[serde(default = "default_allow_unknown_keys")]
    pub allow_unknown_keys: bool,
}

fn default_policy() -> String {
    "strict".to_string()
}

fn default_allow_unknown_keys() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: Option<String>,
}

/// How `score` treats answers that fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerPolicy {
    /// Blocking findings abort scoring.
    Strict,
    /// Findings are logged; missing answers count as zero.
    Lenient,
}

pub const DEFAULT_LOG_LEVEL: &str = "warn";

impl WorkstyleConfig {
    pub fn answer_policy(&self) -> AnswerPolicy {
        match self.answers.as_ref().map(|answers| answers.policy.as_str()) {
            Some("lenient") => AnswerPolicy::Lenient,
            _ => AnswerPolicy::Strict,
        }
    }

    pub fn allow_unknown_keys(&self) -> bool {
        self.answers
            .as_ref()
            .map(|answers| answers.allow_unknown_keys)
            .unwrap_or_else(default_allow_unknown_keys)
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn log_level(&self) -> &str {
        self.log
            .as_ref()
            .and_then(|log| log.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), WorkstyleError> {
        if let Some(answers) = &self.answers {
            if !matches!(answers.policy.as_str(), "strict" | "lenient") {
                return Err(WorkstyleError::ConfigParse(format!(
                    "unsupported answers.policy: {}",
                    answers.policy
                )));
            }
        }

        if let Some(format) = self.report_format() {
            if !matches!(format, "md" | "json") {
                return Err(WorkstyleError::ConfigParse(format!(
                    "unsupported report.format: {format}"
                )));
            }
        }

        if let Some(level) = self.log.as_ref().and_then(|log| log.level.as_ref()) {
            if level.trim().is_empty() {
                return Err(WorkstyleError::ConfigParse(
                    "log.level must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
