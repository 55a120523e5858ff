use serde_json::{json, Map, Value};

use super::feedback::{
    exact_match_feedback, long_answer_feedback, short_answer_feedback, LongAnswerScores,
};
use super::length::length_score;
use super::mock::MockGradingService;
use super::text::{normalize_choice, round2, word_count};
use crate::schemas::grading::{GradingMethod, GradingResult};
use crate::schemas::question::Question;

pub(super) type Strategy = fn(&MockGradingService, &Question, &str) -> GradingResult;

const SHORT_KEYWORD_WEIGHT: f64 = 0.6;
const SHORT_SIMILARITY_WEIGHT: f64 = 0.4;
const SHORT_PASS_THRESHOLD: f64 = 0.7;

const LONG_LENGTH_WEIGHT: f64 = 0.3;
const LONG_KEYWORD_WEIGHT: f64 = 0.3;
const LONG_SIMILARITY_WEIGHT: f64 = 0.4;
const LONG_PASS_THRESHOLD: f64 = 0.6;

/// MCQ and true/false: normalised equality, all or nothing.
pub(super) fn exact_match(
    _service: &MockGradingService,
    question: &Question,
    answer_text: &str,
) -> GradingResult {
    let expected = normalize_choice(&question.expected_answer);
    let submitted = normalize_choice(answer_text);

    let is_correct = expected == submitted;
    let score = if is_correct { max_score(question) } else { 0.0 };

    GradingResult {
        score,
        feedback: exact_match_feedback(is_correct, &question.expected_answer),
        is_correct,
        metadata: metadata(
            GradingMethod::ExactMatch,
            [("expected", json!(expected)), ("submitted", json!(submitted))],
        ),
    }
}

pub(super) fn keyword_similarity(
    service: &MockGradingService,
    question: &Question,
    answer_text: &str,
) -> GradingResult {
    let keyword = service.keyword_score(question, answer_text);
    let similarity = service.similarity(&question.expected_answer, answer_text);

    let combined = SHORT_KEYWORD_WEIGHT * keyword + SHORT_SIMILARITY_WEIGHT * similarity;
    metrics::histogram!("answer_combined_score", "method" => "keyword_similarity")
        .record(combined);

    GradingResult {
        score: scaled_score(question, combined),
        feedback: short_answer_feedback(combined),
        is_correct: combined >= SHORT_PASS_THRESHOLD,
        metadata: metadata(
            GradingMethod::KeywordSimilarity,
            [
                ("keyword_score", json!(round2(keyword))),
                ("similarity_score", json!(round2(similarity))),
                ("combined_score", json!(round2(combined))),
            ],
        ),
    }
}

/// Long answers and essays: length, keyword coverage and similarity blended.
pub(super) fn comprehensive(
    service: &MockGradingService,
    question: &Question,
    answer_text: &str,
) -> GradingResult {
    let words = word_count(answer_text);
    let length = length_score(words);
    let keyword = service.keyword_score(question, answer_text);
    let similarity = service.similarity(&question.expected_answer, answer_text);

    let combined = LONG_LENGTH_WEIGHT * length
        + LONG_KEYWORD_WEIGHT * keyword
        + LONG_SIMILARITY_WEIGHT * similarity;
    metrics::histogram!("answer_combined_score", "method" => "comprehensive").record(combined);

    let feedback = long_answer_feedback(&LongAnswerScores {
        combined,
        length,
        keyword,
        similarity,
        word_count: words,
    });

    GradingResult {
        score: scaled_score(question, combined),
        feedback,
        is_correct: combined >= LONG_PASS_THRESHOLD,
        metadata: metadata(
            GradingMethod::Comprehensive,
            [
                ("length_score", json!(round2(length))),
                ("keyword_score", json!(round2(keyword))),
                ("similarity_score", json!(round2(similarity))),
                ("combined_score", json!(round2(combined))),
                ("word_count", json!(words)),
            ],
        ),
    }
}

fn max_score(question: &Question) -> f64 {
    question.marks.max(0.0)
}

fn scaled_score(question: &Question, combined: f64) -> f64 {
    let marks = max_score(question);
    round2(marks * combined).clamp(0.0, marks)
}

fn metadata<const N: usize>(
    method: GradingMethod,
    entries: [(&str, Value); N],
) -> Map<String, Value> {
    let mut map = Map::with_capacity(N + 1);
    map.insert("grading_method".to_string(), json!(method.as_str()));
    for (key, value) in entries {
        map.insert(key.to_string(), value);
    }
    map
}
