use std::sync::{Mutex, MutexGuard, OnceLock};

use serde_json::json;

use crate::schemas::question::{GradingCriteria, Question, QuestionType};

const GRADING_ENV_VARS: &[&str] = &[
    "ENVIRONMENT",
    "GRADING_SERVICE",
    "GRADING_NEUTRAL_KEYWORD_SCORE",
    "GRADING_LOG_LEVEL",
    "GRADING_LOG_JSON",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "AI_MODEL",
];

pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let lock = LOCK.get_or_init(|| Mutex::new(()));
    lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) fn set_test_env() {
    for key in GRADING_ENV_VARS {
        std::env::remove_var(key);
    }
    std::env::set_var("GRADING_ENV", "test");
    std::env::set_var("GRADING_STRICT_CONFIG", "0");
    std::env::set_var("PROMETHEUS_ENABLED", "0");
}

pub(crate) fn question(question_type: QuestionType, expected: &str, marks: f64) -> Question {
    Question {
        question_type,
        question_text: "Test question".to_string(),
        marks,
        options: Default::default(),
        expected_answer: expected.to_string(),
        grading_criteria: GradingCriteria::default(),
    }
}

pub(crate) fn question_with_keywords(
    question_type: QuestionType,
    expected: &str,
    marks: f64,
    keywords: &[&str],
) -> Question {
    let mut question = question(question_type, expected, marks);
    question.grading_criteria = serde_json::from_value(json!({ "keywords": keywords }))
        .unwrap_or_else(|err| panic!("criteria fixture: {err}"));
    question
}

pub(crate) fn words(count: usize) -> String {
    vec!["lorem"; count].join(" ")
}
