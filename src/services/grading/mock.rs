use super::error::GradingError;
use super::keywords::{extract_keywords, keyword_score, MAX_EXTRACTED_KEYWORDS};
use super::similarity::{cosine_similarity, TfidfVectorizer};
use super::strategies::{self, Strategy};
use super::text::{is_blank, word_overlap};
use super::{GradingService, ServiceKind};
use crate::schemas::grading::GradingResult;
use crate::schemas::question::Question;

/// Question type code to grading strategy. Codes absent here are rejected.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("MCQ", strategies::exact_match),
    ("TRUE_FALSE", strategies::exact_match),
    ("SHORT", strategies::keyword_similarity),
    ("LONG", strategies::comprehensive),
    ("ESSAY", strategies::comprehensive),
];

pub const DEFAULT_NEUTRAL_KEYWORD_SCORE: f64 = 0.5;

/// Heuristic grader combining exact matching, keyword coverage, TF-IDF
/// similarity and answer length.
#[derive(Debug, Clone)]
pub struct MockGradingService {
    vectorizer: TfidfVectorizer,
    neutral_keyword_score: f64,
}

impl Default for MockGradingService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGradingService {
    pub fn new() -> Self {
        Self::with_neutral_keyword_score(DEFAULT_NEUTRAL_KEYWORD_SCORE)
    }

    pub fn with_neutral_keyword_score(neutral_keyword_score: f64) -> Self {
        Self {
            vectorizer: TfidfVectorizer::english(),
            neutral_keyword_score: neutral_keyword_score.clamp(0.0, 1.0),
        }
    }

    pub fn neutral_keyword_score(&self) -> f64 {
        self.neutral_keyword_score
    }

    /// Keyword coverage using the criteria's keywords, or keywords extracted
    /// from the reference answer when none are configured.
    pub fn keyword_score(&self, question: &Question, answer_text: &str) -> f64 {
        let configured = &question.grading_criteria.keywords;
        if !configured.is_empty() {
            return keyword_score(configured, answer_text, self.neutral_keyword_score);
        }

        let extracted = extract_keywords(&question.expected_answer, MAX_EXTRACTED_KEYWORDS);
        keyword_score(&extracted, answer_text, self.neutral_keyword_score)
    }

    /// Cosine similarity of the two texts' TF-IDF vectors, in `[0, 1]`.
    pub fn similarity(&self, expected: &str, submitted: &str) -> f64 {
        if is_blank(expected) || is_blank(submitted) {
            return 0.0;
        }

        match self.vectorizer.fit_transform(&[expected, submitted]) {
            Ok(rows) => cosine_similarity(&rows[0], &rows[1]).clamp(0.0, 1.0),
            Err(err) => {
                tracing::debug!(error = %err, "Falling back to word overlap similarity");
                metrics::counter!("similarity_fallback_total").increment(1);
                word_overlap(expected, submitted)
            }
        }
    }
}

impl GradingService for MockGradingService {
    fn kind(&self) -> ServiceKind {
        ServiceKind::Mock
    }

    fn grade_answer(
        &self,
        question: &Question,
        answer_text: &str,
    ) -> Result<GradingResult, GradingError> {
        let code = question.question_type.as_str();
        let Some((_, strategy)) = STRATEGIES.iter().find(|(key, _)| *key == code) else {
            let err = GradingError::Configuration(format!(
                "no grading strategy for question type '{code}'"
            ));
            metrics::counter!("grading_errors_total", "kind" => err.kind()).increment(1);
            return Err(err);
        };

        let result = strategy(self, question, answer_text);

        let method = result.method().unwrap_or_default().to_string();
        tracing::debug!(
            question_type = %question.question_type,
            method = %method,
            score = result.score,
            is_correct = result.is_correct,
            "Answer graded"
        );
        metrics::counter!("answers_graded_total", "method" => method).increment(1);

        Ok(result)
    }
}
