use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("resume file does not exist: {0}")]
    ResumeNotFound(String),

    #[error("job description file does not exist: {0}")]
    JobDescriptionNotFound(String),

    #[error("invalid input: {0}")]
    InputValidation(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScorerError>;
