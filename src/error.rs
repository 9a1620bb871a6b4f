use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkstyleError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("answers file not found: {0}")]
    AnswersNotFound(String),

    #[error("answers parse error: {0}")]
    AnswersParse(String),

    #[error("invalid answers: {0}")]
    InvalidAnswers(String),

    #[error("unknown productivity type: {0}")]
    UnknownType(String),

    #[error("logging setup failed: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WorkstyleError>;
