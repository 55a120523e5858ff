use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingMethod {
    ExactMatch,
    KeywordSimilarity,
    Comprehensive,
}

impl GradingMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExactMatch => "exact_match",
            Self::KeywordSimilarity => "keyword_similarity",
            Self::Comprehensive => "comprehensive",
        }
    }
}

/// Outcome of grading one answer, ready to be persisted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    pub score: f64,
    pub feedback: String,
    pub is_correct: bool,
    pub metadata: Map<String, Value>,
}

impl GradingResult {
    pub fn method(&self) -> Option<&str> {
        self.metadata.get("grading_method").and_then(Value::as_str)
    }

    pub fn sub_score(&self, key: &str) -> Option<f64> {
        self.metadata.get(key).and_then(Value::as_f64)
    }
}
