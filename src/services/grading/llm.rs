use std::fmt;

use super::error::GradingError;
use super::{GradingService, ServiceKind};
use crate::core::config::AiSettings;
use crate::schemas::grading::GradingResult;
use crate::schemas::question::Question;

pub const DEFAULT_LLM_MODEL: &str = "gpt-4";

/// Placeholder for a language-model grader.
///
/// Construction always succeeds so configuration can be checked at startup;
/// grading fails with [`GradingError::UnsupportedOperation`] until a backend exists.
#[derive(Clone)]
pub struct LlmGradingService {
    api_key: Option<String>,
    base_url: Option<String>,
    model: String,
}

impl Default for LlmGradingService {
    fn default() -> Self {
        Self::new(None, DEFAULT_LLM_MODEL)
    }
}

impl LlmGradingService {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url: None,
            model: model.into(),
        }
    }

    pub fn from_settings(settings: &AiSettings) -> Self {
        let mut service = Self::new(Some(settings.openai_api_key.clone()), &settings.ai_model);
        let base_url = settings.openai_base_url.trim_end_matches('/');
        if !base_url.is_empty() {
            service.base_url = Some(base_url.to_string());
        }
        service
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for LlmGradingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmGradingService")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl GradingService for LlmGradingService {
    fn kind(&self) -> ServiceKind {
        ServiceKind::Llm
    }

    fn grade_answer(
        &self,
        question: &Question,
        _answer_text: &str,
    ) -> Result<GradingResult, GradingError> {
        tracing::warn!(
            model = %self.model,
            question_type = %question.question_type,
            "LLM grading requested but no backend is wired in"
        );
        let err =
            GradingError::UnsupportedOperation("LLM grading service not implemented".to_string());
        metrics::counter!("grading_errors_total", "kind" => err.kind()).increment(1);
        Err(err)
    }
}
