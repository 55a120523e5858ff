//! Automated answer grading.
//!
//! Callers hand a [`Question`] and the raw answer text to a [`GradingService`]
//! and receive a [`GradingResult`]. Which service they get is decided once by
//! [`get_grading_service`] or [`from_settings`].

mod error;
pub mod feedback;
pub mod keywords;
pub mod length;
mod llm;
mod mock;
pub mod similarity;
pub mod stop_words;
mod strategies;
pub mod text;


use std::fmt;

pub use error::GradingError;
pub use llm::{LlmGradingService, DEFAULT_LLM_MODEL};
pub use mock::{MockGradingService, DEFAULT_NEUTRAL_KEYWORD_SCORE};

use crate::core::config::Settings;
use crate::schemas::grading::GradingResult;
use crate::schemas::question::Question;

pub trait GradingService: Send + Sync {
    fn kind(&self) -> ServiceKind;

    /// Grade one answer. Fails only for unsupported question types or when the
    /// service itself cannot grade.
    fn grade_answer(
        &self,
        question: &Question,
        answer_text: &str,
    ) -> Result<GradingResult, GradingError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceKind {
    #[default]
    Mock,
    Llm,
}

impl ServiceKind {
    /// Resolve a configuration string. Only the exact string `llm` selects the
    /// LLM grader; anything else, including typos and other casings, selects
    /// the mock grader.
    pub fn parse(value: &str) -> Self {
        match value {
            "mock" | "" => Self::Mock,
            "llm" => Self::Llm,
            other => {
                tracing::warn!(service = %other, "Unknown grading service; using mock grader");
                Self::Mock
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Llm => "llm",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn get_grading_service(kind: &str) -> Box<dyn GradingService> {
    match ServiceKind::parse(kind) {
        ServiceKind::Mock => Box::new(MockGradingService::new()),
        ServiceKind::Llm => Box::new(LlmGradingService::default()),
    }
}

/// Build the configured grader, wiring in the tuning and credentials from `settings`.
pub fn from_settings(settings: &Settings) -> Box<dyn GradingService> {
    match ServiceKind::parse(&settings.grading().service) {
        ServiceKind::Mock => Box::new(MockGradingService::with_neutral_keyword_score(
            settings.grading().neutral_keyword_score,
        )),
        ServiceKind::Llm => Box::new(LlmGradingService::from_settings(settings.ai())),
    }
}
