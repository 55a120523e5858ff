use std::collections::HashSet;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Whitespace as answer texts are tokenised: Unicode white space plus the
/// ASCII file, group, record and unit separators.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}

pub fn is_blank(text: &str) -> bool {
    words(text).next().is_none()
}

/// Case- and whitespace-insensitive form used for choice comparison.
pub fn normalize_choice(text: &str) -> String {
    text.trim_matches(is_separator).to_uppercase()
}

pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Share of the reference's distinct lower-cased words that also appear in the answer.
pub fn word_overlap(expected: &str, submitted: &str) -> f64 {
    let expected_words = word_set(expected);
    if expected_words.is_empty() {
        return 0.0;
    }

    let submitted_words = word_set(submitted);
    let overlap = expected_words.intersection(&submitted_words).count();
    overlap as f64 / expected_words.len() as f64
}

/// Round to two decimals, ties to even on the exact binary value of `x`.
pub fn round2(x: f64) -> f64 {
    Decimal::from_f64_retain(x)
        .map(|value| value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|value| value.to_f64())
        .unwrap_or(x)
}

fn word_set(text: &str) -> HashSet<String> {
    words(&text.to_lowercase()).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_choice_trims_and_uppercases() {
        assert_eq!(normalize_choice("  b \n"), "B");
        assert_eq!(normalize_choice("True"), "TRUE");
        assert_eq!(normalize_choice(""), "");
    }

    #[test]
    fn word_count_splits_on_any_whitespace() {
        assert_eq!(word_count("one  two\tthree\nfour"), 4);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn ascii_separators_split_words() {
        assert_eq!(word_count("alpha\u{1c}beta\u{1d}gamma\u{1e}delta\u{1f}epsilon"), 5);
        assert_eq!(word_overlap("cell\u{1f}wall", "wall cell"), 1.0);
        assert!(is_blank("\u{1c} \u{1f}\u{a0}"));
        assert_eq!(normalize_choice("\u{1e}b\u{1f}"), "B");
    }

    #[test]
    fn word_overlap_counts_distinct_reference_words() {
        assert_eq!(word_overlap("the cat the hat", "The hat"), 2.0 / 3.0);
        assert_eq!(word_overlap("a b", "c d"), 0.0);
        assert_eq!(word_overlap("", "anything"), 0.0);
    }

    #[test]
    fn round2_rounds_to_cents() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(0.666), 0.67);
        assert_eq!(round2(5.0), 5.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn round2_breaks_exact_ties_to_even() {
        assert_eq!(round2(0.625), 0.62);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.875), 0.88);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn round2_uses_the_stored_binary_value() {
        // 2.675 is stored just below the tie, 0.135 just above it.
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(0.135), 0.14);
        assert_eq!(round2(1.0000000000000002), 1.0);
    }
}
