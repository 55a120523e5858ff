pub fn exact_match_feedback(is_correct: bool, expected_answer: &str) -> String {
    if is_correct {
        "Correct answer!".to_string()
    } else {
        format!("Incorrect. Expected: {expected_answer}")
    }
}

pub fn short_answer_feedback(combined: f64) -> String {
    let message = if combined >= 0.9 {
        "Excellent answer! Well done."
    } else if combined >= 0.7 {
        "Good answer. You covered the main points."
    } else if combined >= 0.5 {
        "Partial credit. Your answer covers some key concepts but could be improved."
    } else {
        "Your answer needs improvement. Please review the key concepts."
    };
    message.to_string()
}

/// Sub-scores behind a long-answer grade.
#[derive(Debug, Clone, Copy)]
pub struct LongAnswerScores {
    pub combined: f64,
    pub length: f64,
    pub keyword: f64,
    pub similarity: f64,
    pub word_count: usize,
}

pub fn long_answer_feedback(scores: &LongAnswerScores) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);

    parts.push(
        if scores.combined >= 0.8 {
            "Excellent comprehensive answer!"
        } else if scores.combined >= 0.6 {
            "Good answer with room for improvement."
        } else {
            "Your answer needs significant improvement."
        }
        .to_string(),
    );

    if scores.length < 0.6 {
        parts.push(format!(
            "Consider expanding your answer (current: {} words).",
            scores.word_count
        ));
    }
    if scores.keyword < 0.5 {
        parts.push("Include more key concepts from the topic.".to_string());
    }
    if scores.similarity < 0.4 {
        parts.push("Your answer could align better with the expected content.".to_string());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_messages() {
        assert_eq!(exact_match_feedback(true, "B"), "Correct answer!");
        assert_eq!(exact_match_feedback(false, " b "), "Incorrect. Expected:  b ");
    }

    #[test]
    fn short_answer_tiers() {
        assert_eq!(short_answer_feedback(0.95), "Excellent answer! Well done.");
        assert_eq!(short_answer_feedback(0.7), "Good answer. You covered the main points.");
        assert!(short_answer_feedback(0.5).starts_with("Partial credit."));
        assert!(short_answer_feedback(0.49).starts_with("Your answer needs improvement."));
    }

    #[test]
    fn long_answer_clauses_accumulate() {
        let feedback = long_answer_feedback(&LongAnswerScores {
            combined: 0.2,
            length: 0.3,
            keyword: 0.0,
            similarity: 0.1,
            word_count: 12,
        });
        assert_eq!(
            feedback,
            "Your answer needs significant improvement. \
             Consider expanding your answer (current: 12 words). \
             Include more key concepts from the topic. \
             Your answer could align better with the expected content."
        );
    }

    #[test]
    fn long_answer_strong_answer_has_single_clause() {
        let feedback = long_answer_feedback(&LongAnswerScores {
            combined: 0.85,
            length: 1.0,
            keyword: 0.8,
            similarity: 0.7,
            word_count: 240,
        });
        assert_eq!(feedback, "Excellent comprehensive answer!");
    }
}
