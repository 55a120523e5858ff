/// Length score for long answers, stepped on word count.
pub fn length_score(word_count: usize) -> f64 {
    match word_count {
        0..=49 => 0.3,
        50..=99 => 0.6,
        100..=199 => 0.9,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints() {
        assert_eq!(length_score(0), 0.3);
        assert_eq!(length_score(49), 0.3);
        assert_eq!(length_score(50), 0.6);
        assert_eq!(length_score(99), 0.6);
        assert_eq!(length_score(100), 0.9);
        assert_eq!(length_score(199), 0.9);
        assert_eq!(length_score(200), 1.0);
        assert_eq!(length_score(250), 1.0);
    }
}
