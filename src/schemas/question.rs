use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::services::grading::GradingError;

/// Question kinds as persisted by the exam store.
///
/// Codes are matched exactly. Codes the engine has no strategy for, including
/// other casings such as `mcq`, are kept as [`QuestionType::Unsupported`] so the
/// dispatcher can reject them at grading time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    Mcq,
    Short,
    Long,
    Essay,
    TrueFalse,
    Unsupported(String),
}

impl QuestionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mcq => "MCQ",
            Self::Short => "SHORT",
            Self::Long => "LONG",
            Self::Essay => "ESSAY",
            Self::TrueFalse => "TRUE_FALSE",
            Self::Unsupported(code) => code,
        }
    }
}

impl From<&str> for QuestionType {
    fn from(code: &str) -> Self {
        match code {
            "MCQ" => Self::Mcq,
            "SHORT" => Self::Short,
            "LONG" => Self::Long,
            "ESSAY" => Self::Essay,
            "TRUE_FALSE" => Self::TrueFalse,
            _ => Self::Unsupported(code.to_string()),
        }
    }
}

impl From<String> for QuestionType {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl From<QuestionType> for String {
    fn from(question_type: QuestionType) -> Self {
        question_type.as_str().to_string()
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grading parameters attached to a question.
///
/// Only `keywords` is interpreted by the engine; other keys (rubrics and the
/// like) are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradingCriteria {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Question {
    #[serde(alias = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub question_text: String,
    #[validate(range(min = 0.0, message = "marks must be non-negative"))]
    pub marks: f64,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    pub expected_answer: String,
    #[serde(default)]
    pub grading_criteria: GradingCriteria,
}

impl Question {
    /// Parse and validate a question payload coming from the exam store.
    pub fn from_json(value: Value) -> Result<Self, GradingError> {
        let question: Self = serde_json::from_value(value)
            .map_err(|err| GradingError::InvalidQuestion(err.to_string()))?;
        question.validate().map_err(|err| GradingError::InvalidQuestion(err.to_string()))?;
        Ok(question)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
