use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradingError {
    /// The question type has no grading strategy.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The selected grader cannot grade yet.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    #[error("invalid question: {0}")]
    InvalidQuestion(String),
}

impl GradingError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::UnsupportedOperation(_) => "unsupported_operation",
            Self::InvalidQuestion(_) => "invalid_question",
        }
    }
}
