use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::stop_words::ENGLISH_STOP_WORDS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorizeError {
    #[error("empty vocabulary; documents contain only stop words")]
    EmptyVocabulary,
}

/// TF-IDF vectorizer fitted on each call's own corpus.
///
/// Holds only immutable configuration, so one instance can serve concurrent
/// callers without locking.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    stop_words: HashSet<&'static str>,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::english()
    }
}

impl TfidfVectorizer {
    pub fn english() -> Self {
        Self { stop_words: ENGLISH_STOP_WORDS.iter().copied().collect() }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        token_pattern()
            .find_iter(&lowered)
            .map(|token| token.as_str())
            .filter(|token| !self.stop_words.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Fit on `documents` and return one L2-normalised row per document.
    ///
    /// Weights are raw term counts times the smoothed idf `ln((1 + n) / (1 + df)) + 1`.
    pub fn fit_transform(&self, documents: &[&str]) -> Result<Vec<Vec<f64>>, VectorizeError> {
        let tokenized: Vec<Vec<String>> =
            documents.iter().map(|document| self.tokenize(document)).collect();

        // Sorted vocabulary keeps the summation order, and so the result, stable.
        let mut vocabulary: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            for token in tokens {
                vocabulary.entry(token.as_str()).or_insert(0);
            }
        }
        if vocabulary.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }
        for (column, index) in vocabulary.values_mut().enumerate() {
            *index = column;
        }

        let mut counts = vec![vec![0.0_f64; vocabulary.len()]; tokenized.len()];
        for (row, tokens) in tokenized.iter().enumerate() {
            for token in tokens {
                counts[row][vocabulary[token.as_str()]] += 1.0;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = (0..vocabulary.len())
            .map(|column| {
                let df = counts.iter().filter(|row| row[column] > 0.0).count() as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        Ok(counts
            .into_iter()
            .map(|row| {
                let weighted: Vec<f64> =
                    row.iter().zip(&idf).map(|(count, weight)| count * weight).collect();
                l2_normalize(weighted)
            })
            .collect())
    }
}

pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    dot / (norm_a * norm_b)
}

fn l2_normalize(row: Vec<f64>) -> Vec<f64> {
    let length = norm(&row);
    if length == 0.0 {
        return row;
    }
    row.into_iter().map(|value| value / length).collect()
}

fn norm(row: &[f64]) -> f64 {
    row.iter().map(|value| value * value).sum::<f64>().sqrt()
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn similarity(a: &str, b: &str) -> Result<f64, VectorizeError> {
        let rows = TfidfVectorizer::english().fit_transform(&[a, b])?;
        Ok(cosine_similarity(&rows[0], &rows[1]))
    }

    #[test]
    fn tokenize_lowercases_and_drops_stop_words_and_single_chars() {
        let tokens = TfidfVectorizer::english().tokenize("The Mitochondria is a powerhouse, x y!");
        assert_eq!(tokens, vec!["mitochondria", "powerhouse"]);
    }

    #[test]
    fn identical_documents_are_fully_similar() {
        let score = similarity("Photosynthesis converts light", "photosynthesis converts LIGHT")
            .expect("vocabulary");
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_documents_have_zero_similarity() {
        let score = similarity("gravity pulls objects", "mitochondria produce energy")
            .expect("vocabulary");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn partial_overlap_is_between_bounds() {
        let score = similarity("cells divide by mitosis", "cells divide quickly").expect("vocabulary");
        assert!(score > 0.0 && score < 1.0, "{score}");
    }

    #[test]
    fn stop_word_only_documents_have_empty_vocabulary() {
        assert_eq!(similarity("the and of", "it is a"), Err(VectorizeError::EmptyVocabulary));
    }

    #[test]
    fn one_sided_vocabulary_yields_zero() {
        let score = similarity("the and of", "osmosis").expect("vocabulary");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn rows_are_unit_length() {
        let rows = TfidfVectorizer::english()
            .fit_transform(&["alpha beta beta", "beta gamma"])
            .expect("vocabulary");
        for row in rows {
            assert!((norm(&row) - 1.0).abs() < 1e-12);
        }
    }
}
