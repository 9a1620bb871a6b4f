use crate::error::{Result, WorkstyleError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Question id to chosen option value, as collected by a quiz front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    values: BTreeMap<String, i64>,
}

/// TOML answer files may nest the pairs under `[answers]`. A nested table
/// next to top-level answers matches neither shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum AnswerDocument {
    Wrapped(WrappedAnswers),
    Flat(BTreeMap<String, i64>),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WrappedAnswers {
    answers: BTreeMap<String, i64>,
}

impl AnswerDocument {
    fn into_answer_set(self) -> AnswerSet {
        match self {
            AnswerDocument::Wrapped(WrappedAnswers { answers }) => AnswerSet { values: answers },
            AnswerDocument::Flat(values) => AnswerSet { values },
        }
    }
}

impl AnswerSet {
    pub fn insert(&mut self, question: impl Into<String>, value: i64) -> Option<i64> {
        self.values.insert(question.into(), value)
    }

    pub fn get(&self, question: &str) -> Option<i64> {
        self.values.get(question).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let document: AnswerDocument =
            toml::from_str(content).map_err(|e| WorkstyleError::AnswersParse(e.to_string()))?;
        Ok(document.into_answer_set())
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: AnswerDocument = serde_json::from_str(content)
            .map_err(|e| WorkstyleError::AnswersParse(e.to_string()))?;
        Ok(document.into_answer_set())
    }

    /// Loads answers from a `.json` or TOML file, or JSON on stdin when
    /// `path` is `-`.
    pub fn load(path: &Path) -> Result<Self> {
        if path == Path::new("-") {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            return Self::from_json_str(&content);
        }
        if !path.exists() {
            return Err(WorkstyleError::AnswersNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        parsed.map_err(|e| match e {
            WorkstyleError::AnswersParse(message) => {
                WorkstyleError::AnswersParse(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}
