use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// Keywords pulled from a reference answer when the criteria name none.
pub const MAX_EXTRACTED_KEYWORDS: usize = 5;

/// Most frequent alphabetic words of four or more letters, in descending
/// frequency with ties kept in first-seen order.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut frequencies: Vec<(&str, usize)> = Vec::new();
    for word in keyword_pattern().find_iter(&lowered).map(|found| found.as_str()) {
        match positions.get(word) {
            Some(&index) => frequencies[index].1 += 1,
            None => {
                positions.insert(word, frequencies.len());
                frequencies.push((word, 1));
            }
        }
    }

    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    frequencies.into_iter().take(top_n).map(|(word, _)| word.to_string()).collect()
}

/// Fraction of `keywords` found as case-insensitive substrings of `answer`.
///
/// Returns `neutral` when there is nothing to look for.
pub fn keyword_score(keywords: &[String], answer: &str, neutral: f64) -> f64 {
    if keywords.is_empty() {
        return neutral;
    }

    let answer = answer.to_lowercase();
    let matched =
        keywords.iter().filter(|keyword| answer.contains(&keyword.to_lowercase())).count();
    matched as f64 / keywords.len() as f64
}

fn keyword_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b[a-zA-Z]{4,}\b").expect("keyword pattern is valid"))
}
