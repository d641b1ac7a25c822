//! Question Classifier
//!
//! Classifies user questions as either:
//! - Trigonometry: right-triangle problems (e.g., "find sec C + cot A")
//! - Compound Interest: growth problems (e.g., "₹1000 becomes ₹1210 in 2 years")

use crate::models::Topic;

/// Static keyword lists — zero allocation
const TRIG_KEYWORDS: &[&str] = &[
    // Shapes and sides
    "triangle", "right angle", "pythagoras", "hypotenuse", "perpendicular",
    // Ratios
    "sec", "cot", "sin", "cos", "tan", "cosec",
];

const INTEREST_KEYWORDS: &[&str] = &[
    // Quantities
    "interest", "principal", "rate", "amount",
    // Compounding language
    "compound", "compounded", "annually", "invested",
];

/// Question topic classifier
pub struct QuestionClassifier;

impl QuestionClassifier {
    /// Classify a question by keyword score.
    ///
    /// Scores are independent substring containment counts on the
    /// lowercased text, not word-boundary-aware. Ties go to compound
    /// interest; there is no error path.
    pub fn classify(question: &str) -> Topic {
        let question_lower = question.to_lowercase();

        let trig_score = TRIG_KEYWORDS
            .iter()
            .filter(|kw| question_lower.contains(**kw))
            .count();

        let interest_score = INTEREST_KEYWORDS
            .iter()
            .filter(|kw| question_lower.contains(**kw))
            .count();

        if trig_score > interest_score {
            Topic::Trigonometry
        } else {
            Topic::CompoundInterest
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigonometry_questions() {
        let cases = vec![
            "In a right triangle, AB = 7 cm and BC = 24 cm. Find sec C + cot A.",
            "Use Pythagoras to find the hypotenuse",
            "find tan of the angle in the triangle",
        ];

        for c in cases {
            assert_eq!(QuestionClassifier::classify(c), Topic::Trigonometry, "{}", c);
        }
    }

    #[test]
    fn test_interest_questions() {
        let cases = vec![
            "₹1000 becomes ₹1210 in 2 years at compound interest. Find the rate.",
            "A sum of 5000 is invested at 8% compounded annually for 3 years",
            "Find the principal if the amount is 1331 after 3 years at 10%",
        ];

        for c in cases {
            assert_eq!(
                QuestionClassifier::classify(c),
                Topic::CompoundInterest,
                "{}",
                c
            );
        }
    }

    #[test]
    fn test_tie_goes_to_interest() {
        // "triangle" vs "rate": one keyword each
        assert_eq!(
            QuestionClassifier::classify("triangle rate"),
            Topic::CompoundInterest
        );
        // No keywords at all is a zero-zero tie
        assert_eq!(
            QuestionClassifier::classify("hello world"),
            Topic::CompoundInterest
        );
    }

    #[test]
    fn test_substring_matching_is_not_word_aware() {
        // "secure" contains "sec", "cost" contains "cos"
        assert_eq!(
            QuestionClassifier::classify("secure cost estimate"),
            Topic::Trigonometry
        );
    }

    #[test]
    fn test_idempotent() {
        let q = "right triangle with sides 3 and 4";
        assert_eq!(
            QuestionClassifier::classify(q),
            QuestionClassifier::classify(q)
        );
    }
}
